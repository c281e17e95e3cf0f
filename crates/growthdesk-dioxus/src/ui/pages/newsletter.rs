use dioxus::prelude::*;

use crate::ui::components::{EmptyState, LoadingState};
use crate::ui::services::Services;

#[component]
pub fn NewsletterPage() -> Element {
    let services = use_context::<Services>();
    let posts = use_resource(move || {
        let services = services.clone();
        async move { services.newsletter_feed().await }
    });

    rsx! {
        div { class: "page newsletter-page",
            header { class: "page-header",
                h2 { "My Newsletter" }
            }
            {match &*posts.read() {
                None => rsx! { LoadingState {} },
                Some(posts) if posts.is_empty() => rsx! {
                    EmptyState { message: "No newsletter posts found." }
                },
                Some(posts) => rsx! {
                    div { class: "post-list",
                        for post in posts.iter() {
                            article { key: "{post.id}", class: "card post-card",
                                if !post.image_url.is_empty() {
                                    div { class: "post-image",
                                        img { src: "{post.image_url}", alt: "{post.title}" }
                                    }
                                }
                                div { class: "post-body",
                                    div { class: "post-meta",
                                        for category in post.categories.iter() {
                                            span { class: "category-chip", "{category}" }
                                        }
                                        span { "{post.date}" }
                                        span { "{post.read_time_minutes} min read" }
                                    }
                                    h3 { "{post.title}" }
                                    p { class: "muted", "{post.excerpt}" }
                                    if !post.url.is_empty() {
                                        a {
                                            class: "rich-text-link",
                                            href: "{post.url}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            "Read Full Article →"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}
