use dioxus::prelude::*;
use growthdesk_engine::blocks::RichText;

use crate::ui::components::RichTextSpans;

#[component]
pub fn TodoItem(spans: Vec<RichText>, checked: bool) -> Element {
    let text_class = if checked {
        "todo-text done"
    } else {
        "todo-text"
    };

    rsx! {
        div { class: "todo-item",
            input {
                r#type: "checkbox",
                checked,
                disabled: true,
            }
            span { class: "{text_class}",
                RichTextSpans { spans }
            }
        }
    }
}
