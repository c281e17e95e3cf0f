use dioxus::prelude::*;
use growthdesk_engine::blocks::ContentGroup;

use crate::ui::components::BlockView;

/// Component to render a list group as one ul/ol container
#[component]
pub fn ListGroup(group: ContentGroup) -> Element {
    match group {
        ContentGroup::BulletList { items } => rsx! {
            ul { class: "block-list",
                for block in items {
                    BlockView { block }
                }
            }
        },
        ContentGroup::NumberedList { items } => rsx! {
            ol { class: "block-list",
                for block in items {
                    BlockView { block }
                }
            }
        },
        ContentGroup::Single(_) => {
            // Single blocks are dispatched by ContentGroupView; handle gracefully
            rsx! { div { "Invalid list group content" } }
        }
    }
}
