use dioxus::prelude::*;

#[component]
pub fn EquationBlock(expression: String) -> Element {
    rsx! {
        div { class: "equation-block", "{expression}" }
    }
}
