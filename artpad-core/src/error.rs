//! Error types for pad operations.
//!
//! Drawing itself never fails; these only surface where outside input is
//! parsed (mode names from the DOM, paths from the address bar).

use thiserror::Error;

/// Result type for pad operations.
pub type PadResult<T> = Result<T, PadError>;

/// Errors that can occur at the edges of the drawing model.
#[derive(Debug, Error)]
pub enum PadError {
    /// A mode name that does not match any known mode.
    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    /// A path that does not match any route.
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// A stroke payload with an empty point list.
    #[error("Stroke has no points")]
    EmptyStroke,

    /// Scene serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
