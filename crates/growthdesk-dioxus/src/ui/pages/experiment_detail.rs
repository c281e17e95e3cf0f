use dioxus::prelude::*;
use growthdesk_engine::blocks::Block;

use crate::ui::Route;
use crate::ui::components::{BlockDocument, EmptyState, LoadingState};
use crate::ui::services::Services;

#[component]
pub fn ExperimentDetail(id: String, on_navigate: Callback<Route>) -> Element {
    let services = use_context::<Services>();
    let record = use_resource({
        let services = services.clone();
        let id = id.clone();
        move || {
            let services = services.clone();
            let id = id.clone();
            async move { services.experiment(&id).await }
        }
    });
    let blocks = use_resource({
        let id = id.clone();
        move || {
            let services = services.clone();
            let id = id.clone();
            async move { services.page_blocks(&id).await }
        }
    });

    rsx! {
        div { class: "page detail-page",
            button {
                class: "back-button",
                onclick: move |_| on_navigate.call(Route::Experiments),
                "← Back to Experiments"
            }
            {match &*record.read() {
                None => rsx! { LoadingState {} },
                Some(None) => rsx! { EmptyState { message: "Experiment not found." } },
                Some(Some(experiment)) => {
                    let status_class = format!(
                        "status-badge status-{}",
                        experiment.status.to_string().to_lowercase()
                    );
                    rsx! {
                        article { class: "detail-card",
                            header { class: "detail-header",
                                div { class: "card-head",
                                    h1 { "{experiment.title}" }
                                    span { class: "{status_class}", "{experiment.status}" }
                                }
                                if !experiment.date.is_empty() {
                                    p { class: "card-meta", "{experiment.date}" }
                                }
                            }
                            div { class: "panel-grid",
                                section { class: "panel panel-problem",
                                    h2 { "Problem" }
                                    p { "{experiment.problem}" }
                                }
                                section { class: "panel panel-hypothesis",
                                    h2 { "Hypothesis" }
                                    p { "{experiment.hypothesis}" }
                                }
                            }
                            if !experiment.metric.is_empty() {
                                section { class: "panel panel-metric",
                                    h2 { "Metric" }
                                    p { "{experiment.metric}" }
                                }
                            }
                            if !experiment.result_summary.is_empty() {
                                section { class: "panel panel-result",
                                    h2 { "Result Summary" }
                                    p { "{experiment.result_summary}" }
                                }
                            }
                            {analysis_section(&blocks.read())}
                        }
                    }
                }
            }}
        }
    }
}

fn analysis_section(blocks: &Option<Vec<Block>>) -> Element {
    match blocks {
        Some(blocks) if !blocks.is_empty() => rsx! {
            section { class: "detail-blocks",
                h2 { "Detailed Analysis" }
                BlockDocument { blocks: blocks.clone() }
            }
        },
        _ => rsx! {},
    }
}
