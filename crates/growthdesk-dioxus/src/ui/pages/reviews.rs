use dioxus::prelude::*;
use growthdesk_engine::records::Review;

use super::stars;
use crate::ui::Route;
use crate::ui::components::{EmptyState, LoadingState};
use crate::ui::services::Services;

#[component]
pub fn ReviewsPage(on_navigate: Callback<Route>) -> Element {
    let services = use_context::<Services>();
    let reviews = use_resource(move || {
        let services = services.clone();
        async move { services.reviews().await }
    });

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "Reviews" }
                p { class: "muted", "Books, videos, and podcasts worth your time." }
            }
            {match &*reviews.read() {
                None => rsx! { LoadingState {} },
                Some(reviews) if reviews.is_empty() => rsx! {
                    EmptyState { message: "No reviews found." }
                },
                Some(reviews) => rsx! {
                    div { class: "card-grid",
                        for review in reviews.iter() {
                            ReviewCard {
                                key: "{review.id}",
                                review: review.clone(),
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
fn ReviewCard(review: Review, on_navigate: Callback<Route>) -> Element {
    let id = review.id.clone();

    rsx! {
        div {
            class: "card review-card",
            onclick: move |_| on_navigate.call(Route::Review(id.clone())),
            if !review.cover_image.is_empty() {
                div { class: "review-cover",
                    img { src: "{review.cover_image}", alt: "{review.title}" }
                }
            }
            div { class: "review-body",
                span { class: "type-badge", "{review.kind}" }
                h3 { "{review.title}" }
                div { class: "review-meta",
                    p { class: "muted", "by {review.author}" }
                    span { class: "rating-stars", "{stars(review.rating)}" }
                }
                if !review.tags.is_empty() {
                    div { class: "tag-row",
                        for tag in review.tags.iter().take(3) {
                            span { class: "tag", "{tag}" }
                        }
                    }
                }
            }
        }
    }
}
