//! Grouping of consecutive list items for rendering.

use super::{Block, BlockKind};

/// A renderer-ready run of blocks: consecutive same-kind list items collapse
/// into one list container, everything else passes through standalone.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentGroup {
    BulletList { items: Vec<Block> },
    NumberedList { items: Vec<Block> },
    Single(Block),
}

/// Groups consecutive list items so the UI can emit one `ul`/`ol` per run.
///
/// Single linear scan. A run only extends while the list kind matches; a
/// bulleted run followed by a numbered run produces two groups, and any
/// non-list block closes the open run. Output order follows input order.
pub fn group_blocks(blocks: &[Block]) -> Vec<ContentGroup> {
    let mut groups = Vec::new();
    let mut i = 0;

    while i < blocks.len() {
        match &blocks[i].kind {
            BlockKind::BulletedListItem { .. } | BlockKind::NumberedListItem { .. } => {
                let start = i;
                let numbered = matches!(blocks[i].kind, BlockKind::NumberedListItem { .. });
                while i < blocks.len() && is_list_item(&blocks[i], numbered) {
                    i += 1;
                }

                let items = blocks[start..i].to_vec();
                groups.push(if numbered {
                    ContentGroup::NumberedList { items }
                } else {
                    ContentGroup::BulletList { items }
                });
            }
            _ => {
                groups.push(ContentGroup::Single(blocks[i].clone()));
                i += 1;
            }
        }
    }

    groups
}

fn is_list_item(block: &Block, numbered: bool) -> bool {
    match &block.kind {
        BlockKind::BulletedListItem { .. } => !numbered,
        BlockKind::NumberedListItem { .. } => numbered,
        _ => false,
    }
}
