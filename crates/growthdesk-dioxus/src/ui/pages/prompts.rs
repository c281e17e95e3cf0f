use dioxus::prelude::*;
use growthdesk_engine::records::Prompt;

use super::CategoryChip;
use crate::ui::Route;
use crate::ui::components::{EmptyState, LoadingState};
use crate::ui::services::Services;

#[component]
pub fn PromptsPage(on_navigate: Callback<Route>) -> Element {
    let services = use_context::<Services>();
    let prompts = use_resource(move || {
        let services = services.clone();
        async move { services.prompts().await }
    });
    let mut selected = use_signal(|| "All".to_string());
    let on_select = Callback::new(move |category: String| selected.set(category));

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "Prompt Library" }
                p { class: "muted", "Curated prompts for various use cases." }
            }
            {match &*prompts.read() {
                None => rsx! { LoadingState {} },
                Some(prompts) if prompts.is_empty() => rsx! {
                    EmptyState { message: "No prompts found." }
                },
                Some(prompts) => {
                    let selected_category = selected.read().clone();
                    let filtered: Vec<Prompt> = prompts
                        .iter()
                        .filter(|prompt| {
                            selected_category == "All" || prompt.category == selected_category
                        })
                        .cloned()
                        .collect();

                    rsx! {
                        div { class: "filter-row",
                            for category in categories(prompts) {
                                CategoryChip {
                                    key: "{category}",
                                    active: category == selected_category,
                                    name: category.clone(),
                                    on_select
                                }
                            }
                        }
                        if filtered.is_empty() {
                            EmptyState { message: "No prompts found for this category." }
                        } else {
                            div { class: "card-grid",
                                for prompt in filtered.iter() {
                                    PromptCard {
                                        key: "{prompt.id}",
                                        prompt: prompt.clone(),
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

fn categories(prompts: &[Prompt]) -> Vec<String> {
    let mut categories = vec!["All".to_string()];
    for prompt in prompts {
        if !categories.contains(&prompt.category) {
            categories.push(prompt.category.clone());
        }
    }
    categories
}

#[component]
fn PromptCard(prompt: Prompt, on_navigate: Callback<Route>) -> Element {
    let id = prompt.id.clone();
    let extra_tags = prompt.tags.len().saturating_sub(3);

    rsx! {
        div {
            class: "card prompt-card",
            onclick: move |_| on_navigate.call(Route::Prompt(id.clone())),
            span { class: "category-label", "{prompt.category}" }
            h3 { "{prompt.title}" }
            if !prompt.tags.is_empty() {
                div { class: "tag-row",
                    for tag in prompt.tags.iter().take(3) {
                        span { class: "tag", "{tag}" }
                    }
                    if extra_tags > 0 {
                        span { class: "muted", "+{extra_tags} more" }
                    }
                }
            }
        }
    }
}
