//! Domain-level errors.
//!
//! Invalid user input is never an error here: it is reported through
//! validation results. These errors cover malformed configuration values.

use thiserror::Error;

/// Domain-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Unknown password policy name
    #[error("Unknown password policy: {0}")]
    UnknownPolicy(String),

    /// Unknown form field name
    #[error("Unknown field: {0}")]
    UnknownField(String),
}

impl DomainError {
    /// Create an unknown policy error
    pub fn unknown_policy(name: impl Into<String>) -> Self {
        DomainError::UnknownPolicy(name.into())
    }

    /// Create an unknown field error
    pub fn unknown_field(name: impl Into<String>) -> Self {
        DomainError::UnknownField(name.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
