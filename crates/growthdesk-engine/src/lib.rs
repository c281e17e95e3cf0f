pub mod blocks;
pub mod feed;
pub mod records;
pub mod sources;

// Re-export key types for easier usage
pub use blocks::{Block, BlockKind, ContentGroup, RichText, group_blocks};
pub use records::{Experiment, NewsletterPost, Prompt, Review, Term, Tool};
