use dioxus::prelude::*;

#[component]
pub fn VideoBlock(url: String) -> Element {
    rsx! {
        div { class: "video-block",
            video { controls: true,
                source { src: "{url}" }
            }
        }
    }
}
