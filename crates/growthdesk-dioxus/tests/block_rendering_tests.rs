//! Rendering tests for the block components, driven through dioxus-ssr so
//! the assertions run against the actual markup the components produce.

use dioxus::prelude::*;
use dioxus_ssr::render_element;
use pretty_assertions::assert_eq;
use growthdesk_dioxus::ui::components::{BlockDocument, BlockView, RichTextSpans};
use growthdesk_engine::blocks::{
    Annotations, Block, BlockKind, FileSource, Palette, RichText, TextColor,
};

fn spans(text: &str) -> Vec<RichText> {
    vec![RichText {
        text: text.to_string(),
        annotations: Annotations::default(),
        href: None,
    }]
}

fn block(id: &str, kind: BlockKind) -> Block {
    Block {
        id: id.to_string(),
        has_children: false,
        kind,
        children: Vec::new(),
    }
}

fn paragraph(id: &str, text: &str) -> Block {
    block(
        id,
        BlockKind::Paragraph {
            rich_text: spans(text),
        },
    )
}

fn bullet(id: &str, text: &str) -> Block {
    block(
        id,
        BlockKind::BulletedListItem {
            rich_text: spans(text),
        },
    )
}

fn numbered(id: &str, text: &str) -> Block {
    block(
        id,
        BlockKind::NumberedListItem {
            rich_text: spans(text),
        },
    )
}

fn render_document(blocks: Vec<Block>) -> String {
    render_element(rsx! {
        BlockDocument { blocks }
    })
}

#[test]
fn consecutive_bullets_share_one_list_container() {
    let html = render_document(vec![
        paragraph("p1", "intro"),
        bullet("b1", "first"),
        bullet("b2", "second"),
        paragraph("p2", "outro"),
    ]);

    assert_eq!(html.matches("<ul").count(), 1);
    assert_eq!(html.matches("<li").count(), 2);

    // Order preserved: intro, list, outro.
    let intro = html.find("intro").unwrap();
    let list = html.find("<ul").unwrap();
    let outro = html.find("outro").unwrap();
    assert!(intro < list && list < outro);
}

#[test]
fn bullet_and_numbered_runs_never_merge() {
    let html = render_document(vec![
        bullet("b1", "first"),
        bullet("b2", "second"),
        numbered("n1", "third"),
    ]);

    assert_eq!(html.matches("<ul").count(), 1);
    assert_eq!(html.matches("<ol").count(), 1);
    assert!(html.find("<ul").unwrap() < html.find("<ol").unwrap());
}

#[test]
fn interposed_block_splits_a_bulleted_run() {
    let html = render_document(vec![
        bullet("b1", "first"),
        paragraph("p1", "between"),
        bullet("b2", "second"),
    ]);

    assert_eq!(html.matches("<ul").count(), 2);
}

#[test]
fn empty_sequence_renders_an_empty_document() {
    let html = render_document(Vec::new());

    assert!(html.contains("block-document"));
    assert_eq!(html.matches("<p").count(), 0);
    assert_eq!(html.matches("<ul").count(), 0);
}

#[test]
fn code_annotation_is_terminal_even_with_href() {
    let span = RichText {
        text: "x".to_string(),
        annotations: Annotations {
            code: true,
            ..Annotations::default()
        },
        href: Some("http://a".to_string()),
    };

    let html = render_element(rsx! {
        RichTextSpans { spans: vec![span] }
    });

    assert!(html.contains("<code"), "expected monospace output: {html}");
    assert!(!html.contains("<a"), "code span must not render a link: {html}");
}

#[test]
fn link_spans_render_anchors_with_color_class() {
    let span = RichText {
        text: "docs".to_string(),
        annotations: Annotations {
            color: TextColor::Foreground(Palette::Green),
            ..Annotations::default()
        },
        href: Some("https://example.com".to_string()),
    };

    let html = render_element(rsx! {
        RichTextSpans { spans: vec![span] }
    });

    assert!(html.contains("<a"));
    assert!(html.contains("https://example.com"));
    assert!(html.contains("text-green"));
}

#[test]
fn emphasis_wrappers_nest_in_fixed_order() {
    let span = RichText {
        text: "styled".to_string(),
        annotations: Annotations {
            bold: true,
            italic: true,
            color: TextColor::Foreground(Palette::Green),
            ..Annotations::default()
        },
        href: None,
    };

    let html = render_element(rsx! {
        RichTextSpans { spans: vec![span] }
    });

    // italic wraps bold wraps the colored span
    let em = html.find("<em").unwrap();
    let strong = html.find("<strong").unwrap();
    let colored = html.find("text-green").unwrap();
    assert!(em < strong && strong < colored, "unexpected nesting: {html}");
}

#[test]
fn background_color_spans_get_bg_classes() {
    let span = RichText {
        text: "marked".to_string(),
        annotations: Annotations {
            color: TextColor::Background(Palette::Yellow),
            ..Annotations::default()
        },
        href: None,
    };

    let html = render_element(rsx! {
        RichTextSpans { spans: vec![span] }
    });

    assert!(html.contains("bg-yellow"));
}

#[test]
fn unknown_kind_renders_named_placeholder() {
    let html = render_document(vec![block(
        "u1",
        BlockKind::Unsupported {
            kind: "synced_block".to_string(),
        },
    )]);

    assert!(html.contains("Unsupported block type: synced_block"));
}

#[test]
fn table_row_is_inert_outside_a_table() {
    let html = render_document(vec![block(
        "r1",
        BlockKind::TableRow {
            cells: vec![spans("cell")],
        },
    )]);

    assert!(!html.contains("<tr"));
    assert!(!html.contains("cell"));
}

#[test]
fn table_first_row_becomes_header_when_flagged() {
    let rows = vec![
        block(
            "r1",
            BlockKind::TableRow {
                cells: vec![spans("Metric"), spans("Value")],
            },
        ),
        block(
            "r2",
            BlockKind::TableRow {
                cells: vec![spans("CAC"), spans("$42")],
            },
        ),
    ];
    let mut table = block("t1", BlockKind::Table { has_row_header: true });
    table.children = rows.clone();

    let html = render_document(vec![table]);
    assert_eq!(html.matches("<th").count(), 2);
    assert_eq!(html.matches("<td").count(), 2);

    let mut plain = block("t2", BlockKind::Table { has_row_header: false });
    plain.children = rows;
    let html = render_document(vec![plain]);
    assert_eq!(html.matches("<th").count(), 0);
    assert_eq!(html.matches("<td").count(), 4);
}

#[test]
fn toggle_children_reuse_the_document_renderer() {
    let mut toggle = block(
        "t1",
        BlockKind::Toggle {
            rich_text: spans("More details"),
        },
    );
    toggle.children = vec![bullet("b1", "inner first"), bullet("b2", "inner second")];

    let html = render_document(vec![toggle]);

    assert!(html.contains("<details"));
    assert!(html.contains("<summary"));
    // Children went through list grouping inside the body.
    assert_eq!(html.matches("<ul").count(), 1);
    assert_eq!(html.matches("<li").count(), 2);
}

#[test]
fn toggle_without_children_omits_the_body() {
    let toggle = block(
        "t1",
        BlockKind::Toggle {
            rich_text: spans("Empty"),
        },
    );

    let html = render_document(vec![toggle]);

    assert!(html.contains("<details"));
    assert!(!html.contains("toggle-body"));
}

#[test]
fn media_blocks_resolve_either_source_variant() {
    let html = render_document(vec![
        block(
            "i1",
            BlockKind::Image {
                source: FileSource::External {
                    url: "https://example.com/chart.png".to_string(),
                },
                caption: spans("Conversion funnel"),
            },
        ),
        block(
            "f1",
            BlockKind::File {
                source: FileSource::Hosted {
                    url: "https://files.example.com/report.pdf".to_string(),
                },
                name: None,
            },
        ),
    ]);

    assert!(html.contains("https://example.com/chart.png"));
    assert!(html.contains("Conversion funnel"));
    assert!(html.contains("https://files.example.com/report.pdf"));
    // Missing file name falls back to the default label.
    assert!(html.contains("Download file"));
}

#[test]
fn image_without_caption_omits_figcaption() {
    let html = render_document(vec![block(
        "i1",
        BlockKind::Image {
            source: FileSource::Hosted {
                url: "https://files.example.com/pic.png".to_string(),
            },
            caption: Vec::new(),
        },
    )]);

    assert!(html.contains("<figure"));
    assert!(!html.contains("<figcaption"));
}

#[test]
fn todo_state_is_reflected_in_markup() {
    let html = render_element(rsx! {
        BlockView {
            block: block(
                "td1",
                BlockKind::ToDo {
                    rich_text: spans("ship it"),
                    checked: true,
                },
            )
        }
    });

    assert!(html.contains("checkbox"));
    assert!(html.contains("done"));
    assert!(html.contains("ship it"));
}

#[test]
fn rendering_is_deterministic() {
    let blocks = vec![
        paragraph("p1", "intro"),
        bullet("b1", "first"),
        numbered("n1", "second"),
        block("d1", BlockKind::Divider),
    ];

    assert_eq!(render_document(blocks.clone()), render_document(blocks));
}
