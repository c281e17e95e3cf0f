use dioxus::prelude::*;

use super::{rendered_blocks, stars};
use crate::ui::Route;
use crate::ui::components::{EmptyState, LoadingState};
use crate::ui::services::Services;

#[component]
pub fn ReviewDetail(id: String, on_navigate: Callback<Route>) -> Element {
    let services = use_context::<Services>();
    let record = use_resource({
        let services = services.clone();
        let id = id.clone();
        move || {
            let services = services.clone();
            let id = id.clone();
            async move { services.review(&id).await }
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
                onclick: move |_| on_navigate.call(Route::Reviews),
                "← Back to Reviews"
            }
            {match &*record.read() {
                None => rsx! { LoadingState {} },
                Some(None) => rsx! { EmptyState { message: "Review not found." } },
                Some(Some(review)) => rsx! {
                    article { class: "detail-card",
                        if !review.cover_image.is_empty() {
                            div { class: "detail-cover",
                                img { src: "{review.cover_image}", alt: "{review.title}" }
                            }
                        }
                        header { class: "detail-header",
                            span { class: "type-badge", "{review.kind}" }
                            h1 { "{review.title}" }
                            div { class: "review-meta",
                                p { class: "muted", "by {review.author}" }
                                span { class: "rating-stars", "{stars(review.rating)}" }
                            }
                            if !review.takeaways.is_empty() {
                                div { class: "takeaways",
                                    h2 { "Key Takeaways" }
                                    ul {
                                        for takeaway in review.takeaways.iter() {
                                            li { "{takeaway}" }
                                        }
                                    }
                                }
                            }
                            if !review.tags.is_empty() {
                                div { class: "tag-row",
                                    for tag in review.tags.iter() {
                                        span { class: "tag", "{tag}" }
                                    }
                                }
                            }
                            if review.url != "#" && !review.url.is_empty() {
                                a {
                                    class: "rich-text-link",
                                    href: "{review.url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "Visit original ↗"
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
