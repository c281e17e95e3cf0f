use dioxus::prelude::*;

use super::rendered_blocks;
use crate::ui::Route;
use crate::ui::components::{EmptyState, LoadingState};
use crate::ui::services::Services;

#[component]
pub fn TermDetail(id: String, on_navigate: Callback<Route>) -> Element {
    let services = use_context::<Services>();
    let record = use_resource({
        let services = services.clone();
        let id = id.clone();
        move || {
            let services = services.clone();
            let id = id.clone();
            async move { services.term(&id).await }
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
                onclick: move |_| on_navigate.call(Route::Knowledge),
                "← Back to Knowledge Base"
            }
            {match &*record.read() {
                None => rsx! { LoadingState {} },
                Some(None) => rsx! { EmptyState { message: "Knowledge entry not found." } },
                Some(Some(term)) => rsx! {
                    article { class: "detail-card",
                        header { class: "detail-header",
                            span { class: "category-label", "{term.category}" }
                            h1 { "{term.term}" }
                            p { class: "definition", "{term.definition}" }
                        }
                        if !term.formula.is_empty() {
                            section { class: "panel panel-formula",
                                h2 { "Formula" }
                                code { "{term.formula}" }
                            }
                        }
                        if !term.long_description.is_empty() {
                            p { class: "long-description", "{term.long_description}" }
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
