use dioxus::prelude::*;
use growthdesk_engine::blocks::{Block, RichText};

use crate::ui::components::{BlockDocument, RichTextSpans};

/// Disclosure block. The body reuses the top-level renderer for the child
/// sequence, so nested toggles and lists group the same way the page does.
#[component]
pub fn ToggleBlock(spans: Vec<RichText>, blocks: Vec<Block>) -> Element {
    rsx! {
        details { class: "toggle-block",
            summary { class: "toggle-summary",
                RichTextSpans { spans }
            }
            if !blocks.is_empty() {
                div { class: "toggle-body",
                    BlockDocument { blocks }
                }
            }
        }
    }
}
