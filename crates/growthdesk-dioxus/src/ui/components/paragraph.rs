use dioxus::prelude::*;
use growthdesk_engine::blocks::RichText;

use crate::ui::components::RichTextSpans;

#[component]
pub fn Paragraph(spans: Vec<RichText>) -> Element {
    rsx! {
        p { class: "paragraph",
            RichTextSpans { spans }
        }
    }
}
