use dioxus::prelude::*;
use growthdesk_engine::blocks::{Palette, RichText};

use crate::ui::components::RichTextSpans;

#[component]
pub fn CalloutBlock(spans: Vec<RichText>, icon: Option<String>, color: Palette) -> Element {
    let class = format!("callout callout-{}", color.name());

    rsx! {
        div { class: "{class}",
            if let Some(icon) = icon {
                span { class: "callout-icon", "{icon}" }
            }
            div { class: "callout-body",
                RichTextSpans { spans }
            }
        }
    }
}
