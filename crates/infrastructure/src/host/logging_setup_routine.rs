//! Logging setup routine adapter.

use liftoff_application::ports::{SetupError, SetupRoutine};

/// Setup routine that only records its registration.
///
/// The browser rendition registers a service worker here; that routine
/// is an external collaborator, so this adapter just logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSetupRoutine;

impl LoggingSetupRoutine {
    /// Creates the routine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SetupRoutine for LoggingSetupRoutine {
    fn register(&self) -> Result<(), SetupError> {
        tracing::info!("setup routine registered");
        Ok(())
    }
}
