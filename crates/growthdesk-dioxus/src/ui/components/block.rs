use dioxus::prelude::*;
use growthdesk_engine::blocks::{Block, BlockKind};

use crate::ui::components::{
    RichTextSpans, callout::CalloutBlock, code_block::CodeBlock, divider::Divider,
    equation::EquationBlock, file_attachment::FileAttachment, heading::Heading, image::ImageBlock,
    paragraph::Paragraph, quote::QuoteBlock, table::TableBlock,
    table_of_contents::TableOfContents, todo_item::TodoItem, toggle::ToggleBlock,
    unsupported::UnsupportedBlock, video::VideoBlock,
};

#[component]
pub fn BlockView(block: Block) -> Element {
    match block.kind {
        BlockKind::Paragraph { rich_text } => rsx! {
            Paragraph { spans: rich_text }
        },
        BlockKind::Heading1 { rich_text } => rsx! {
            Heading { spans: rich_text, level: 1 }
        },
        BlockKind::Heading2 { rich_text } => rsx! {
            Heading { spans: rich_text, level: 2 }
        },
        BlockKind::Heading3 { rich_text } => rsx! {
            Heading { spans: rich_text, level: 3 }
        },
        BlockKind::BulletedListItem { rich_text } | BlockKind::NumberedListItem { rich_text } => {
            rsx! {
                li { class: "list-item",
                    RichTextSpans { spans: rich_text }
                }
            }
        }
        BlockKind::ToDo { rich_text, checked } => rsx! {
            TodoItem { spans: rich_text, checked }
        },
        BlockKind::Toggle { rich_text } => rsx! {
            ToggleBlock { spans: rich_text, blocks: block.children }
        },
        BlockKind::Code { source, language } => rsx! {
            CodeBlock { source, language }
        },
        BlockKind::Quote { rich_text } => rsx! {
            QuoteBlock { spans: rich_text }
        },
        BlockKind::Callout { rich_text, icon, color } => rsx! {
            CalloutBlock { spans: rich_text, icon, color }
        },
        BlockKind::Table { has_row_header } => rsx! {
            TableBlock { rows: block.children, has_row_header }
        },
        // Rows only have meaning inside a table; inert at the top level.
        BlockKind::TableRow { .. } => rsx! {},
        BlockKind::Image { source, caption } => rsx! {
            ImageBlock { url: source.url().to_string(), caption }
        },
        BlockKind::Video { source } => rsx! {
            VideoBlock { url: source.url().to_string() }
        },
        BlockKind::File { source, name } => rsx! {
            FileAttachment { url: source.url().to_string(), name }
        },
        BlockKind::Divider => rsx! {
            Divider {}
        },
        BlockKind::Equation { expression } => rsx! {
            EquationBlock { expression }
        },
        BlockKind::TableOfContents => rsx! {
            TableOfContents {}
        },
        BlockKind::Unsupported { kind } => rsx! {
            UnsupportedBlock { kind }
        },
    }
}
