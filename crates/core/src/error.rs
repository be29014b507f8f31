//! Error kinds raised by the container itself.
//!
//! Two failure paths exist: `expect` returns a recoverable [`Error`], while
//! `unwrap` unwinds with [`UNWRAP_ON_ERR`] as its panic payload.

use thiserror::Error;

/// Panic payload of `unwrap()` when called on an `Err` value.
pub const UNWRAP_ON_ERR: &str = "Cannot call unwrap() on an Err value";

/// Recoverable error produced when a caller asserted success but got failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `expect(message)` was called on an `Err` value.
    ///
    /// Renders as exactly the caller-supplied message.
    #[error("{message}")]
    Expectation { message: String },
}

impl Error {
    /// Create an expectation failure carrying the caller's message.
    pub fn expectation(message: impl Into<String>) -> Self {
        Self::Expectation {
            message: message.into(),
        }
    }

    /// The diagnostic attached by the caller.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Expectation { message } => message,
        }
    }
}
