//! Diagnostics raised while formatting
//!
//! In the default (lenient) mode none of these abort a format call: the
//! offending placeholder or brace simply contributes nothing. They are only
//! returned to the caller when strict mode is requested.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Stray closing brace or a placeholder that never closes
    #[error("malformed template at offset {position}: {message}")]
    MalformedTemplate { position: usize, message: String },

    /// Placeholder index has no matching argument
    #[error("argument {index} requested but only {available} supplied")]
    MissingArgument { index: i64, available: usize },

    /// Explicit index text that is not a base-10 integer
    #[error("invalid argument index '{text}'")]
    InvalidIndex { text: String },
}

impl FormatError {
    pub(crate) fn malformed(position: usize, message: impl Into<String>) -> Self {
        FormatError::MalformedTemplate {
            position,
            message: message.into(),
        }
    }
}
