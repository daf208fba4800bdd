//! Application error types.

use artpad_core::PadError;
use artpad_renderer::RenderError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Result type for application setup.
pub type AppResult<T> = Result<T, AppError>;

/// Errors raised while mounting or configuring the app.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required DOM object is missing or has the wrong type.
    #[error("DOM error: {0}")]
    Dom(String),

    /// Options JSON could not be parsed.
    #[error("Invalid options: {0}")]
    Options(String),

    /// Drawing model error.
    #[error(transparent)]
    Pad(#[from] PadError),

    /// Renderer error.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl AppError {
    pub(crate) fn dom(context: &str, value: &JsValue) -> Self {
        Self::Dom(format!("{context}: {value:?}"))
    }
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Options(err.to_string())
    }
}
