//! Error types for Keepsake

use thiserror::Error;

/// Main error type for Keepsake operations.
///
/// Navigation itself never errors: out-of-range indices and missing render
/// targets are silent no-ops. Errors only surface at the edges, when loading
/// card content from disk.
#[derive(Error, Debug)]
pub enum CardError {
    /// Card content file could not be parsed
    #[error("Content error: {0}")]
    Content(#[from] serde_json::Error),

    /// Card content parsed but is not usable as a card
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
