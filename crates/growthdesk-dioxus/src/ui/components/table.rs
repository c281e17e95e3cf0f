use dioxus::prelude::*;
use growthdesk_engine::blocks::{Block, BlockKind, RichText};

use crate::ui::components::RichTextSpans;

/// Renders a table block's row children as a grid. Non-row children are
/// skipped; the first row renders as header cells when the table says so.
#[component]
pub fn TableBlock(rows: Vec<Block>, has_row_header: bool) -> Element {
    let cell_rows: Vec<Vec<Vec<RichText>>> = rows
        .into_iter()
        .filter_map(|row| match row.kind {
            BlockKind::TableRow { cells } => Some(cells),
            _ => None,
        })
        .collect();

    rsx! {
        div { class: "table-wrapper",
            table { class: "block-table",
                tbody {
                    for (row_index, cells) in cell_rows.into_iter().enumerate() {
                        TableRowView {
                            key: "{row_index}",
                            cells,
                            header: has_row_header && row_index == 0
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TableRowView(cells: Vec<Vec<RichText>>, header: bool) -> Element {
    rsx! {
        tr {
            for spans in cells.into_iter() {
                if header {
                    th { class: "table-header-cell",
                        RichTextSpans { spans }
                    }
                } else {
                    td { class: "table-cell",
                        RichTextSpans { spans }
                    }
                }
            }
        }
    }
}
