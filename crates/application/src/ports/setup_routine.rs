//! Startup setup routine port.

use thiserror::Error;

/// Error reported by a setup routine. Logged, never fatal.
#[derive(Debug, Error)]
#[error("setup routine failed: {0}")]
pub struct SetupError(pub String);

/// Port for the routine registered once at startup, before the
/// application embeds (a service-worker registration in the browser
/// rendition of this system).
pub trait SetupRoutine: Send + Sync {
    /// Registers the routine.
    ///
    /// # Errors
    /// Returns [`SetupError`] when registration fails; the bootstrapper
    /// logs it and continues.
    fn register(&self) -> Result<(), SetupError>;
}
