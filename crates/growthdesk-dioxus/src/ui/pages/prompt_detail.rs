use dioxus::prelude::*;

use super::rendered_blocks;
use crate::ui::Route;
use crate::ui::components::{EmptyState, LoadingState};
use crate::ui::services::Services;

#[component]
pub fn PromptDetail(id: String, on_navigate: Callback<Route>) -> Element {
    let services = use_context::<Services>();
    let record = use_resource({
        let services = services.clone();
        let id = id.clone();
        move || {
            let services = services.clone();
            let id = id.clone();
            async move { services.prompt(&id).await }
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
                onclick: move |_| on_navigate.call(Route::Prompts),
                "← Back to Prompt Library"
            }
            {match &*record.read() {
                None => rsx! { LoadingState {} },
                Some(None) => rsx! { EmptyState { message: "Prompt not found." } },
                Some(Some(prompt)) => rsx! {
                    article { class: "detail-card",
                        header { class: "detail-header",
                            span { class: "category-label", "{prompt.category}" }
                            h1 { "{prompt.title}" }
                            if !prompt.tags.is_empty() {
                                div { class: "tag-row",
                                    for tag in prompt.tags.iter() {
                                        span { class: "tag", "{tag}" }
                                    }
                                }
                            }
                        }
                        div { class: "detail-blocks",
                            {rendered_blocks(&blocks.read())}
                        }
                    }
                },
            }}
        }
    }
}
