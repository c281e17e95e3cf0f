use dioxus::prelude::*;
use growthdesk_engine::blocks::{RichText, TextColor};

/// Renders a rich-text span sequence.
#[component]
pub fn RichTextSpans(spans: Vec<RichText>) -> Element {
    rsx! {
        for span in spans.into_iter() {
            {render_span(span)}
        }
    }
}

/// Render a single span with the fixed annotation precedence: `code` is
/// terminal (no link or emphasis nesting), then links, then the emphasis
/// wrappers in a fixed order so output stays deterministic.
fn render_span(span: RichText) -> Element {
    if span.annotations.code {
        return rsx! {
            code { class: "inline-code", "{span.text}" }
        };
    }

    let color_class = color_class(span.annotations.color);

    if let Some(href) = span.href {
        let class = match &color_class {
            Some(color) => format!("rich-text-link {color}"),
            None => "rich-text-link".to_string(),
        };
        return rsx! {
            a {
                class: "{class}",
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{span.text}"
            }
        };
    }

    let mut element = match &color_class {
        Some(color) => rsx! { span { class: "{color}", "{span.text}" } },
        None => rsx! { span { "{span.text}" } },
    };
    if span.annotations.bold {
        element = rsx! { strong { {element} } };
    }
    if span.annotations.italic {
        element = rsx! { em { {element} } };
    }
    if span.annotations.strikethrough {
        element = rsx! { del { {element} } };
    }
    if span.annotations.underline {
        element = rsx! { u { {element} } };
    }
    element
}

fn color_class(color: TextColor) -> Option<String> {
    match color {
        TextColor::Default => None,
        TextColor::Foreground(palette) => Some(format!("text-{}", palette.name())),
        TextColor::Background(palette) => Some(format!("bg-{}", palette.name())),
    }
}
