//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Declaration parsing error.
    #[error("declaration parse error: {0}")]
    Parse(#[from] autoctor_model::ParseError),

    /// Declaration model error.
    #[error("declaration error: {0}")]
    Model(#[from] autoctor_model::ModelError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The host requested cancellation before the run completed.
    #[error("generation cancelled")]
    Cancelled,

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Returns true if the run was abandoned on request.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
