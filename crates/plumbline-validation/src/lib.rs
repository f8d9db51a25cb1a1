//! Plumbline Validation
//!
//! Format validators for values that arrive as strings: email addresses,
//! phone numbers and Israeli ID numbers. Every validator comes in two forms:
//! `validate_*` returns `Result<(), ValidationError>` with a human-readable
//! message, `is_valid_*` returns a plain `bool`.

pub mod email;
pub mod national_id;
pub mod phone;

use thiserror::Error;

// Re-export all validators
pub use email::*;
pub use national_id::*;
pub use phone::*;

/// A value failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }
}
