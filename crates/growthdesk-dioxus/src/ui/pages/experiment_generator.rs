use dioxus::prelude::*;
use growthdesk_engine::sources::HypothesisSuggestion;

use crate::ui::services::Services;

/// Inline form that turns a problem statement into a suggested hypothesis
/// and metric via the suggestion source.
#[component]
pub fn ExperimentGenerator() -> Element {
    let services = use_context::<Services>();
    let mut problem = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut result = use_signal(|| None::<HypothesisSuggestion>);

    let on_generate = move |_: MouseEvent| {
        let problem_text = problem.read().trim().to_string();
        if problem_text.is_empty() || *loading.read() {
            return;
        }
        loading.set(true);
        result.set(None);

        let services = services.clone();
        spawn(async move {
            let suggestion = services.suggest_hypothesis(&problem_text).await;
            result.set(suggestion);
            loading.set(false);
        });
    };

    rsx! {
        div { class: "hypothesis-generator",
            h3 { "AI Hypothesis Generator" }
            p { class: "muted",
                "Stuck on how to test a problem? Describe the issue, and I'll "
                "generate a structured hypothesis for you."
            }
            div { class: "generator-form",
                input {
                    r#type: "text",
                    value: "{problem}",
                    placeholder: "e.g., Users are dropping off at the shipping address step.",
                    oninput: move |evt| problem.set(evt.value()),
                }
                button {
                    disabled: *loading.read() || problem.read().trim().is_empty(),
                    onclick: on_generate,
                    if *loading.read() { "Generating..." } else { "Generate" }
                }
            }
            if let Some(suggestion) = result.read().as_ref() {
                div { class: "generator-result",
                    span { class: "result-label", "Suggested Hypothesis" }
                    p { class: "result-hypothesis", "{suggestion.hypothesis}" }
                    span { class: "result-label", "Primary Metric" }
                    p { class: "result-metric", "{suggestion.metric}" }
                }
            }
        }
    }
}
