use dioxus::prelude::*;
use growthdesk_engine::blocks::{RichText, plain_text};

use crate::ui::components::RichTextSpans;

#[component]
pub fn ImageBlock(url: String, caption: Vec<RichText>) -> Element {
    let alt = plain_text(&caption);

    rsx! {
        figure { class: "image-block",
            img { src: "{url}", alt: "{alt}" }
            if !caption.is_empty() {
                figcaption { class: "image-caption",
                    RichTextSpans { spans: caption }
                }
            }
        }
    }
}
