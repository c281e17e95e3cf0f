use dioxus::prelude::*;

#[component]
pub fn CodeBlock(source: String, language: String) -> Element {
    let code_class = if language.is_empty() {
        "language-text".to_string()
    } else {
        format!("language-{language}")
    };

    rsx! {
        pre { class: "code-block",
            code { class: "{code_class}", "{source}" }
        }
    }
}
