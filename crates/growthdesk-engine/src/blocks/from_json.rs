//! Mapping from workspace-API block JSON into the typed tree.
//!
//! The API ships each block as an object with a `"type"` discriminator plus a
//! payload object stored under that same name. Anything missing or ill-typed
//! degrades to an empty field; an unrecognized discriminator becomes
//! `BlockKind::Unsupported`. Nothing here returns an error.

use serde_json::Value;

use super::{Annotations, Block, BlockKind, FileSource, Palette, RichText, TextColor, plain_text};

impl Block {
    /// Map one API block object. `children` starts empty; the fetch layer
    /// attaches them after recursing into blocks that report `has_children`.
    pub fn from_json(value: &Value) -> Block {
        let kind_name = value["type"].as_str().unwrap_or("");
        let payload = &value[kind_name];

        Block {
            id: value["id"].as_str().unwrap_or("").to_string(),
            has_children: value["has_children"].as_bool().unwrap_or(false),
            kind: block_kind(kind_name, payload),
            children: Vec::new(),
        }
    }
}

fn block_kind(kind_name: &str, payload: &Value) -> BlockKind {
    match kind_name {
        "paragraph" => BlockKind::Paragraph {
            rich_text: rich_text(payload),
        },
        "heading_1" => BlockKind::Heading1 {
            rich_text: rich_text(payload),
        },
        "heading_2" => BlockKind::Heading2 {
            rich_text: rich_text(payload),
        },
        "heading_3" => BlockKind::Heading3 {
            rich_text: rich_text(payload),
        },
        "bulleted_list_item" => BlockKind::BulletedListItem {
            rich_text: rich_text(payload),
        },
        "numbered_list_item" => BlockKind::NumberedListItem {
            rich_text: rich_text(payload),
        },
        "to_do" => BlockKind::ToDo {
            rich_text: rich_text(payload),
            checked: payload["checked"].as_bool().unwrap_or(false),
        },
        "toggle" => BlockKind::Toggle {
            rich_text: rich_text(payload),
        },
        "code" => BlockKind::Code {
            source: plain_text(&rich_text(payload)),
            language: payload["language"].as_str().unwrap_or("").to_string(),
        },
        "quote" => BlockKind::Quote {
            rich_text: rich_text(payload),
        },
        "callout" => BlockKind::Callout {
            rich_text: rich_text(payload),
            icon: payload["icon"]["emoji"].as_str().map(str::to_string),
            color: callout_palette(payload["color"].as_str().unwrap_or("")),
        },
        "table" => BlockKind::Table {
            has_row_header: payload["has_row_header"].as_bool().unwrap_or(false),
        },
        "table_row" => BlockKind::TableRow {
            cells: payload["cells"]
                .as_array()
                .map(|cells| cells.iter().map(rich_text_spans).collect())
                .unwrap_or_default(),
        },
        "image" => BlockKind::Image {
            source: file_source(payload),
            caption: payload["caption"]
                .as_array()
                .map(|spans| spans.iter().map(rich_text_span).collect())
                .unwrap_or_default(),
        },
        "video" => BlockKind::Video {
            source: file_source(payload),
        },
        "file" => BlockKind::File {
            source: file_source(payload),
            name: payload["name"].as_str().map(str::to_string),
        },
        "divider" => BlockKind::Divider,
        "equation" => BlockKind::Equation {
            expression: payload["expression"].as_str().unwrap_or("").to_string(),
        },
        "table_of_contents" => BlockKind::TableOfContents,
        other => BlockKind::Unsupported {
            kind: other.to_string(),
        },
    }
}

fn rich_text(payload: &Value) -> Vec<RichText> {
    rich_text_spans(&payload["rich_text"])
}

fn rich_text_spans(value: &Value) -> Vec<RichText> {
    value
        .as_array()
        .map(|spans| spans.iter().map(rich_text_span).collect())
        .unwrap_or_default()
}

fn rich_text_span(value: &Value) -> RichText {
    let annotations = &value["annotations"];
    RichText {
        text: value["plain_text"].as_str().unwrap_or("").to_string(),
        annotations: Annotations {
            bold: annotations["bold"].as_bool().unwrap_or(false),
            italic: annotations["italic"].as_bool().unwrap_or(false),
            strikethrough: annotations["strikethrough"].as_bool().unwrap_or(false),
            underline: annotations["underline"].as_bool().unwrap_or(false),
            code: annotations["code"].as_bool().unwrap_or(false),
            color: TextColor::parse(annotations["color"].as_str().unwrap_or("")),
        },
        href: value["href"].as_str().map(str::to_string),
    }
}

/// Callouts use the same palette as text annotations but default to blue,
/// with or without a `_background` suffix on the wire.
fn callout_palette(name: &str) -> Palette {
    let base = name.strip_suffix("_background").unwrap_or(name);
    Palette::parse(base).unwrap_or(Palette::Blue)
}

fn file_source(payload: &Value) -> FileSource {
    if payload["type"].as_str() == Some("external") {
        FileSource::External {
            url: payload["external"]["url"].as_str().unwrap_or("").to_string(),
        }
    } else {
        FileSource::Hosted {
            url: payload["file"]["url"].as_str().unwrap_or("").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn span(text: &str) -> Value {
        json!({
            "plain_text": text,
            "href": null,
            "annotations": {
                "bold": false, "italic": false, "strikethrough": false,
                "underline": false, "code": false, "color": "default"
            }
        })
    }

    #[test]
    fn maps_paragraph_with_annotations() {
        let value = json!({
            "id": "b1",
            "type": "paragraph",
            "has_children": false,
            "paragraph": {
                "rich_text": [{
                    "plain_text": "hello",
                    "href": "https://example.com",
                    "annotations": {
                        "bold": true, "italic": false, "strikethrough": false,
                        "underline": false, "code": false, "color": "green"
                    }
                }]
            }
        });

        let block = Block::from_json(&value);
        assert_eq!(block.id, "b1");
        let BlockKind::Paragraph { rich_text } = &block.kind else {
            panic!("expected paragraph, got {:?}", block.kind);
        };
        assert_eq!(rich_text.len(), 1);
        assert!(rich_text[0].annotations.bold);
        assert_eq!(
            rich_text[0].annotations.color,
            TextColor::Foreground(Palette::Green)
        );
        assert_eq!(rich_text[0].href.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn maps_code_block_to_joined_source() {
        let value = json!({
            "id": "b2",
            "type": "code",
            "has_children": false,
            "code": {
                "rich_text": [span("let x = 1;"), span("\nlet y = 2;")],
                "language": "rust"
            }
        });

        let block = Block::from_json(&value);
        assert_eq!(
            block.kind,
            BlockKind::Code {
                source: "let x = 1;\nlet y = 2;".to_string(),
                language: "rust".to_string(),
            }
        );
    }

    #[test]
    fn maps_external_and_hosted_media() {
        let external = json!({
            "id": "b3",
            "type": "image",
            "has_children": false,
            "image": {
                "type": "external",
                "external": { "url": "https://example.com/pic.png" },
                "caption": []
            }
        });
        let hosted = json!({
            "id": "b4",
            "type": "video",
            "has_children": false,
            "video": {
                "type": "file",
                "file": { "url": "https://files.example.com/clip.mp4" }
            }
        });

        let BlockKind::Image { source, .. } = Block::from_json(&external).kind else {
            panic!("expected image");
        };
        assert_eq!(source.url(), "https://example.com/pic.png");

        let BlockKind::Video { source } = Block::from_json(&hosted).kind else {
            panic!("expected video");
        };
        assert_eq!(source.url(), "https://files.example.com/clip.mp4");
    }

    #[test]
    fn maps_table_row_cells() {
        let value = json!({
            "id": "b5",
            "type": "table_row",
            "has_children": false,
            "table_row": {
                "cells": [[span("a")], [span("b"), span("c")]]
            }
        });

        let BlockKind::TableRow { cells } = Block::from_json(&value).kind else {
            panic!("expected table row");
        };
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[1].len(), 2);
        assert_eq!(cells[1][1].text, "c");
    }

    #[test]
    fn unknown_kind_becomes_unsupported() {
        let value = json!({
            "id": "b6",
            "type": "synced_block",
            "has_children": false,
            "synced_block": {}
        });

        assert_eq!(
            Block::from_json(&value).kind,
            BlockKind::Unsupported {
                kind: "synced_block".to_string()
            }
        );
    }

    #[test]
    fn malformed_block_degrades_to_empty_unsupported() {
        let block = Block::from_json(&json!({}));
        assert_eq!(block.id, "");
        assert!(!block.has_children);
        assert_eq!(
            block.kind,
            BlockKind::Unsupported {
                kind: String::new()
            }
        );
    }

    #[test]
    fn callout_color_defaults_to_blue() {
        let value = json!({
            "id": "b7",
            "type": "callout",
            "has_children": false,
            "callout": {
                "rich_text": [span("note")],
                "icon": { "type": "emoji", "emoji": "💡" },
                "color": "yellow_background"
            }
        });

        let BlockKind::Callout { icon, color, .. } = Block::from_json(&value).kind else {
            panic!("expected callout");
        };
        assert_eq!(icon.as_deref(), Some("💡"));
        assert_eq!(color, Palette::Yellow);

        let plain = json!({
            "id": "b8",
            "type": "callout",
            "has_children": false,
            "callout": { "rich_text": [] }
        });
        let BlockKind::Callout { color, .. } = Block::from_json(&plain).kind else {
            panic!("expected callout");
        };
        assert_eq!(color, Palette::Blue);
    }
}
