use dioxus::prelude::*;
use growthdesk_engine::blocks::ContentGroup;

use crate::ui::components::{BlockView, ListGroup};

/// Component for rendering individual content groups
#[component]
pub fn ContentGroupView(group: ContentGroup) -> Element {
    match group {
        ContentGroup::Single(block) => rsx! {
            BlockView { block }
        },
        ContentGroup::BulletList { .. } | ContentGroup::NumberedList { .. } => rsx! {
            ListGroup { group }
        },
    }
}
