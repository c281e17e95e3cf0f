use dioxus::prelude::*;
use growthdesk_engine::blocks::{Block, group_blocks};

use crate::ui::components::ContentGroupView;

/// Top-level renderer for an ordered block sequence. Consecutive list items
/// are collapsed into list groups before dispatch; toggles and tables recurse
/// back into this component for their children.
#[component]
pub fn BlockDocument(blocks: Vec<Block>) -> Element {
    let groups = group_blocks(&blocks);

    rsx! {
        div { class: "block-document",
            for (group_index, group) in groups.into_iter().enumerate() {
                ContentGroupView {
                    key: "{group_index}",
                    group
                }
            }
        }
    }
}
