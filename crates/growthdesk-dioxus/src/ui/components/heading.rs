use dioxus::prelude::*;
use growthdesk_engine::blocks::RichText;

use crate::ui::components::RichTextSpans;

#[component]
pub fn Heading(spans: Vec<RichText>, level: u32) -> Element {
    let class_name = format!("heading level-{level}");

    match level {
        1 => rsx! { h1 { class: "{class_name}", RichTextSpans { spans } } },
        2 => rsx! { h2 { class: "{class_name}", RichTextSpans { spans } } },
        _ => rsx! { h3 { class: "{class_name}", RichTextSpans { spans } } },
    }
}
