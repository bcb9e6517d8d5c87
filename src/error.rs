//! Error types for page wiring.
//!
//! Nothing here reaches the visitor: every caller sits at an event boundary,
//! logs the error and disables the affected behaviour.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PageError>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PageError {
    #[error("no global `window`")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    /// An element the markup contract expects is absent.
    #[error("missing element: {0}")]
    MissingElement(String),

    #[error("invalid JSON in #{source_id}: {source}")]
    InvalidJson {
        source_id: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
