pub mod dashboard;
pub mod experiment_detail;
pub mod experiment_generator;
pub mod experiments;
pub mod knowledge;
pub mod newsletter;
pub mod prompt_detail;
pub mod prompts;
pub mod review_detail;
pub mod reviews;
pub mod term_detail;
pub mod tools;

pub use dashboard::Dashboard;
pub use experiment_detail::ExperimentDetail;
pub use experiments::ExperimentsPage;
pub use knowledge::KnowledgePage;
pub use newsletter::NewsletterPage;
pub use prompt_detail::PromptDetail;
pub use prompts::PromptsPage;
pub use review_detail::ReviewDetail;
pub use reviews::ReviewsPage;
pub use term_detail::TermDetail;
pub use tools::ToolsPage;

use dioxus::prelude::*;
use growthdesk_engine::blocks::Block;

use crate::ui::components::{BlockDocument, LoadingState};

/// Five-star rating string, e.g. `★★★☆☆`.
pub(crate) fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Shared detail-page body: the page's rendered block tree, with loading and
/// no-content states.
pub(crate) fn rendered_blocks(blocks: &Option<Vec<Block>>) -> Element {
    match blocks {
        None => rsx! { LoadingState {} },
        Some(blocks) if blocks.is_empty() => rsx! {
            p { class: "muted", "No additional content available." }
        },
        Some(blocks) => rsx! {
            BlockDocument { blocks: blocks.clone() }
        },
    }
}

/// One category filter chip, as used by the knowledge and prompt pages.
#[component]
pub(crate) fn CategoryChip(name: String, active: bool, on_select: Callback<String>) -> Element {
    let class = if active {
        "filter-chip active"
    } else {
        "filter-chip"
    };
    let value = name.clone();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| on_select.call(value.clone()),
            "{name}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stars_fill_up_to_five() {
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(9), "★★★★★");
    }
}
