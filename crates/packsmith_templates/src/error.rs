//! Error types for template selection and rendering.

use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur during template operations.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Unknown template id: {0}")]
    UnknownTemplate(String),

    #[error("Unknown static asset id: {0}")]
    UnknownAsset(String),
}
