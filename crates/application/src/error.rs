//! Application error types

use thiserror::Error;

use crate::ports::{HelperError, HostError};

/// Structural startup failures surfaced by `initialize`.
///
/// Authentication event failures never appear here: those are logged
/// and swallowed by the event forwarder.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The OAuth helper could not be initialized.
    #[error("oauth helper error: {0}")]
    Helper(#[from] HelperError),

    /// The embedded application could not be mounted.
    #[error("app host error: {0}")]
    Host(#[from] HostError),
}

/// Result type alias for bootstrap operations.
pub type BootstrapResult<T> = Result<T, BootstrapError>;
