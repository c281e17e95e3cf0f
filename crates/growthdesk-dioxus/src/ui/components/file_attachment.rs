use dioxus::prelude::*;

#[component]
pub fn FileAttachment(url: String, name: Option<String>) -> Element {
    let label = name.unwrap_or_else(|| "Download file".to_string());

    rsx! {
        div { class: "file-block",
            a {
                class: "file-link",
                href: "{url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "📎 {label}"
            }
        }
    }
}
