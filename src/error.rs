//! Error types for Linestep.
//!
//! This module provides a unified error handling approach using `thiserror`.
//! The steppers and the renderer never fail; these errors describe why a
//! generate request was turned into a cleared state, plus the I/O around it.

use thiserror::Error;

use crate::session::Field;

/// Result type alias for Linestep operations.
pub type Result<T> = std::result::Result<T, LinestepError>;

/// Errors that can occur in Linestep.
#[derive(Debug, Error)]
pub enum LinestepError {
    /// An endpoint field is empty, non-numeric or not finite.
    #[error("Invalid input for {field}: {value:?}")]
    InvalidInput {
        /// Field that failed to parse.
        field: Field,
        /// Raw text of the field.
        value: String,
    },

    /// The request would produce more records than allowed.
    #[error("Too many steps: {steps} exceeds the limit of {limit}")]
    TooManySteps {
        /// Records the request would produce.
        steps: f64,
        /// Configured maximum.
        limit: usize,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LinestepError {
    /// Create an InvalidInput error.
    pub fn invalid_input(field: Field, value: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            value: value.into(),
        }
    }

    /// Create a TooManySteps error.
    pub fn too_many_steps(steps: f64, limit: usize) -> Self {
        Self::TooManySteps { steps, limit }
    }
}
