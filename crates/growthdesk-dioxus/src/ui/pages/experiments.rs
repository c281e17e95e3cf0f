use dioxus::prelude::*;
use growthdesk_engine::records::Experiment;

use super::experiment_generator::ExperimentGenerator;
use crate::ui::Route;
use crate::ui::components::{EmptyState, LoadingState};
use crate::ui::services::Services;

#[component]
pub fn ExperimentsPage(on_navigate: Callback<Route>) -> Element {
    let services = use_context::<Services>();
    let experiments = use_resource(move || {
        let services = services.clone();
        async move { services.experiments().await }
    });

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "Experiments" }
                p { class: "muted", "Growth experiments, hypotheses, and what they taught me." }
            }
            ExperimentGenerator {}
            {match &*experiments.read() {
                None => rsx! { LoadingState {} },
                Some(experiments) if experiments.is_empty() => rsx! {
                    EmptyState { message: "No experiments found." }
                },
                Some(experiments) => rsx! {
                    div { class: "card-list",
                        for experiment in experiments.iter() {
                            ExperimentCard {
                                key: "{experiment.id}",
                                experiment: experiment.clone(),
                                on_navigate
                            }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
fn ExperimentCard(experiment: Experiment, on_navigate: Callback<Route>) -> Element {
    let status_class = format!(
        "status-badge status-{}",
        experiment.status.to_string().to_lowercase()
    );
    let id = experiment.id.clone();

    rsx! {
        div {
            class: "card experiment-card",
            onclick: move |_| on_navigate.call(Route::Experiment(id.clone())),
            div { class: "card-head",
                h3 { "{experiment.title}" }
                span { class: "{status_class}", "{experiment.status}" }
            }
            if !experiment.problem.is_empty() {
                p { class: "card-line",
                    strong { "Problem: " }
                    "{experiment.problem}"
                }
            }
            if !experiment.hypothesis.is_empty() {
                p { class: "card-line",
                    strong { "Hypothesis: " }
                    "{experiment.hypothesis}"
                }
            }
            if !experiment.date.is_empty() {
                p { class: "card-meta", "{experiment.date}" }
            }
        }
    }
}
