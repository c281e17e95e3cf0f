use dioxus::prelude::*;

/// Fallback for block kinds without specific handling. Renders a visible
/// placeholder naming the kind instead of failing.
#[component]
pub fn UnsupportedBlock(kind: String) -> Element {
    rsx! {
        div { class: "unsupported-block",
            "Unsupported block type: {kind}"
        }
    }
}
