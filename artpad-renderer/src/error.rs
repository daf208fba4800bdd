//! Renderer error types.

use thiserror::Error;

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur during rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The drawing surface could not be created or used.
    #[error("Surface error: {0}")]
    Surface(String),

    /// A drawing primitive failed.
    #[error("Frame render failed: {0}")]
    Frame(String),

    /// Resource allocation failed.
    #[error("Failed to allocate resource: {0}")]
    Resource(String),
}
