use dioxus::prelude::*;
use growthdesk_engine::records::{Experiment, ExperimentStatus, NewsletterPost, Review};

use super::stars;
use crate::ui::Route;
use crate::ui::components::LoadingState;
use crate::ui::services::Services;

#[component]
pub fn Dashboard(on_navigate: Callback<Route>) -> Element {
    let services = use_context::<Services>();
    let experiments = use_resource({
        let services = services.clone();
        move || {
            let services = services.clone();
            async move { services.experiments().await }
        }
    });
    let reviews = use_resource({
        let services = services.clone();
        move || {
            let services = services.clone();
            async move { services.reviews().await }
        }
    });
    let newsletter = use_resource(move || {
        let services = services.clone();
        async move { services.newsletter_highlights().await }
    });

    rsx! {
        div { class: "page dashboard",
            div { class: "dashboard-top",
                section { class: "hero-card",
                    h2 { "Hello, I'm Ellen." }
                    p {
                        "Growth Marketing Manager. This is my digital garden where I "
                        "cultivate experiments, reviews, and marketing knowledge."
                    }
                }
                section { class: "dashboard-panel",
                    h3 { "Current Experiment" }
                    {current_experiment(&experiments.read(), on_navigate)}
                }
            }
            div { class: "dashboard-grid",
                section { class: "dashboard-panel",
                    h3 { "Latest Newsletter" }
                    {newsletter_panel(&newsletter.read(), on_navigate)}
                }
                section { class: "dashboard-panel",
                    h3 { "Recent Reviews" }
                    {reviews_panel(&reviews.read(), on_navigate)}
                }
            }
        }
    }
}

fn current_experiment(
    experiments: &Option<Vec<Experiment>>,
    on_navigate: Callback<Route>,
) -> Element {
    let Some(experiments) = experiments else {
        return rsx! { LoadingState {} };
    };

    match experiments
        .iter()
        .find(|e| e.status == ExperimentStatus::Running)
    {
        Some(experiment) => rsx! {
            div { class: "experiment-teaser",
                div { class: "teaser-head",
                    span { class: "teaser-title", "{experiment.title}" }
                    span { class: "status-badge status-running", "{experiment.status}" }
                }
                p { class: "muted", "{experiment.hypothesis}" }
                button {
                    class: "link-button",
                    onclick: move |_| on_navigate.call(Route::Experiments),
                    "View Details"
                }
            }
        },
        None => rsx! {
            p { class: "muted", "No active experiments running." }
        },
    }
}

fn newsletter_panel(posts: &Option<Vec<NewsletterPost>>, on_navigate: Callback<Route>) -> Element {
    let Some(posts) = posts else {
        return rsx! { LoadingState {} };
    };
    if posts.is_empty() {
        return rsx! { p { class: "muted", "No newsletter posts yet." } };
    }

    rsx! {
        div { class: "teaser-list",
            for post in posts.iter().take(2) {
                div { class: "post-teaser",
                    div { class: "teaser-head",
                        div { class: "category-row",
                            for category in post.categories.iter() {
                                span { class: "category-chip", "{category}" }
                            }
                        }
                        span { class: "teaser-date", "{post.date}" }
                    }
                    h4 { "{post.title}" }
                    p { class: "muted", "{post.excerpt}" }
                }
            }
        }
        button {
            class: "ghost-button",
            onclick: move |_| on_navigate.call(Route::Newsletter),
            "Read all posts"
        }
    }
}

fn reviews_panel(reviews: &Option<Vec<Review>>, on_navigate: Callback<Route>) -> Element {
    let Some(reviews) = reviews else {
        return rsx! { LoadingState {} };
    };
    if reviews.is_empty() {
        return rsx! { p { class: "muted", "No reviews yet." } };
    }

    rsx! {
        div { class: "teaser-list",
            for review in reviews.iter().take(3) {
                div { class: "review-teaser",
                    div {
                        p { class: "teaser-title", "{review.title}" }
                        p { class: "muted", "{review.author}" }
                    }
                    span { class: "rating-stars", "{stars(review.rating)}" }
                }
            }
        }
        button {
            class: "ghost-button",
            onclick: move |_| on_navigate.call(Route::Reviews),
            "Browse Library"
        }
    }
}
