use dioxus::prelude::*;

/// The workspace renders this client-side from the page outline; here it is
/// a static marker card.
#[component]
pub fn TableOfContents() -> Element {
    rsx! {
        div { class: "toc-block",
            p { "Table of Contents" }
        }
    }
}
