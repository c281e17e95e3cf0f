use dioxus::prelude::*;
use growthdesk_engine::records::Tool;

use crate::ui::components::{EmptyState, LoadingState};
use crate::ui::services::Services;

#[component]
pub fn ToolsPage() -> Element {
    let services = use_context::<Services>();
    let tools = use_resource(move || {
        let services = services.clone();
        async move { services.tools().await }
    });

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "Tools & Stack" }
                p { class: "muted", "The software powering my growth machine." }
            }
            {match &*tools.read() {
                None => rsx! { LoadingState {} },
                Some(tools) if tools.is_empty() => rsx! {
                    EmptyState { message: "No tools found." }
                },
                Some(tools) => rsx! {
                    div { class: "card-grid",
                        for tool in tools.iter() {
                            ToolCard { key: "{tool.id}", tool: tool.clone() }
                        }
                    }
                },
            }}
        }
    }
}

#[component]
fn ToolCard(tool: Tool) -> Element {
    let icon_url = if tool.icon_url.is_empty() {
        "https://via.placeholder.com/48".to_string()
    } else {
        tool.icon_url.clone()
    };
    let price_class = format!(
        "price-badge price-{}",
        tool.price.to_string().to_lowercase()
    );

    rsx! {
        a {
            class: "card tool-card",
            href: "{tool.url}",
            target: "_blank",
            rel: "noopener noreferrer",
            img { class: "tool-icon", src: "{icon_url}", alt: "{tool.name}" }
            div { class: "tool-body",
                h3 { "{tool.name}" }
                div { class: "tool-meta",
                    span { class: "muted", "{tool.category}" }
                    span { class: "{price_class}", "{tool.price}" }
                }
                p { class: "muted", "{tool.description}" }
            }
        }
    }
}
