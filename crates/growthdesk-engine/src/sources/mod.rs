//! Fetch collaborators for the workspace document API, the newsletter feed,
//! and the hypothesis suggestion call.
//!
//! Everything here is deliberately forgiving: a transport failure or
//! non-success response is logged and surfaces as an empty result, so callers
//! treat "nothing fetched" and "fetch failed" identically. Distinguishing the
//! two is a presentation concern, not this layer's.

pub mod hypothesis;
pub mod notion;
pub mod substack;

pub use hypothesis::{HypothesisSuggestion, suggest_hypothesis};
pub use notion::NotionClient;
pub use substack::fetch_posts;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Request failed with status {0}")]
    Status(reqwest::StatusCode),
}
