use dioxus::prelude::*;
use growthdesk_engine::blocks::RichText;

use crate::ui::components::RichTextSpans;

#[component]
pub fn QuoteBlock(spans: Vec<RichText>) -> Element {
    rsx! {
        blockquote { class: "quote-block",
            RichTextSpans { spans }
        }
    }
}
