//! Error types for template rendering

use thiserror::Error;

use crate::config::Mode;

/// Errors that can occur while binding templates
#[derive(Error, Debug)]
pub enum RenderError {
    /// No item or container template configured for the active mode
    #[error("No template configured for mode '{0}'")]
    UnknownMode(Mode),

    /// Template failed to parse or evaluate
    #[error("Render error: {0}")]
    Engine(String),
}

impl From<tera::Error> for RenderError {
    fn from(error: tera::Error) -> Self {
        // Tera keeps the useful detail in the source chain
        let mut message = error.to_string();
        let mut source = std::error::Error::source(&error);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::Engine(message)
    }
}
