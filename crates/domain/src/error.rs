//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No credential profile exists with the given name.
    #[error("unknown profile: {0}")]
    UnknownProfile(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
