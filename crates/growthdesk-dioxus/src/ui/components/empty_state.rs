use dioxus::prelude::*;

/// Page-level "no data" placeholder, shown when a fetch yields nothing
/// (including after a logged fetch failure).
#[component]
pub fn EmptyState(message: &'static str) -> Element {
    rsx! {
        div { class: "empty-state",
            "{message}"
        }
    }
}

#[component]
pub fn LoadingState() -> Element {
    rsx! {
        div { class: "loading-state",
            "Loading..."
        }
    }
}
