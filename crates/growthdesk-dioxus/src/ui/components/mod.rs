pub mod block;
pub mod block_document;
pub mod callout;
pub mod code_block;
pub mod content_group;
pub mod divider;
pub mod empty_state;
pub mod equation;
pub mod file_attachment;
pub mod heading;
pub mod image;
pub mod list_group;
pub mod paragraph;
pub mod quote;
pub mod rich_text;
pub mod table;
pub mod table_of_contents;
pub mod todo_item;
pub mod toggle;
pub mod unsupported;
pub mod video;

pub use block::BlockView;
pub use block_document::BlockDocument;
pub use content_group::ContentGroupView;
pub use empty_state::{EmptyState, LoadingState};
pub use list_group::ListGroup;
pub use rich_text::RichTextSpans;
