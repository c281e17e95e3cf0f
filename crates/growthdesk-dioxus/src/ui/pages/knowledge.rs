use dioxus::prelude::*;
use growthdesk_engine::records::Term;

use super::CategoryChip;
use crate::ui::Route;
use crate::ui::components::{EmptyState, LoadingState};
use crate::ui::services::Services;

#[component]
pub fn KnowledgePage(on_navigate: Callback<Route>) -> Element {
    let services = use_context::<Services>();
    let terms = use_resource(move || {
        let services = services.clone();
        async move { services.terms().await }
    });
    let mut selected = use_signal(|| "All".to_string());
    let on_select = Callback::new(move |category: String| selected.set(category));

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "Knowledge Base" }
            }
            {match &*terms.read() {
                None => rsx! { LoadingState {} },
                Some(terms) if terms.is_empty() => rsx! {
                    EmptyState { message: "No knowledge entries found." }
                },
                Some(terms) => {
                    let selected_category = selected.read().clone();
                    let filtered: Vec<Term> = terms
                        .iter()
                        .filter(|term| {
                            selected_category == "All" || term.category == selected_category
                        })
                        .cloned()
                        .collect();

                    rsx! {
                        div { class: "filter-row",
                            for category in categories(terms) {
                                CategoryChip {
                                    key: "{category}",
                                    active: category == selected_category,
                                    name: category.clone(),
                                    on_select
                                }
                            }
                        }
                        if filtered.is_empty() {
                            EmptyState { message: "No knowledge entries found for this category." }
                        } else {
                            div { class: "card-grid",
                                for term in filtered.iter() {
                                    TermCard {
                                        key: "{term.id}",
                                        term: term.clone(),
                                        on_navigate
                                    }
                                }
                            }
                        }
                    }
                }
            }}
        }
    }
}

/// "All" plus each category in first-seen order.
fn categories(terms: &[Term]) -> Vec<String> {
    let mut categories = vec!["All".to_string()];
    for term in terms {
        if !categories.contains(&term.category) {
            categories.push(term.category.clone());
        }
    }
    categories
}

#[component]
fn TermCard(term: Term, on_navigate: Callback<Route>) -> Element {
    let id = term.id.clone();

    rsx! {
        div {
            class: "card term-card",
            onclick: move |_| on_navigate.call(Route::Term(id.clone())),
            span { class: "category-label", "{term.category}" }
            h3 { "{term.term}" }
            p { class: "muted", "{term.definition}" }
        }
    }
}
