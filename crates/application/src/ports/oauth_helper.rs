//! OAuth helper port.
//!
//! The helper is a third-party collaborator: it owns session storage,
//! the browser popup flow, and token refresh. The bootstrapper only
//! reads the stored session, hands the helper its configuration, and
//! subscribes to its authentication events.

use async_trait::async_trait;
use liftoff_domain::{AuthEvent, OAuthConfig, Session};
use thiserror::Error;
use tokio::sync::broadcast;

/// Errors surfaced by an OAuth helper adapter.
#[derive(Debug, Error)]
pub enum HelperError {
    /// The helper rejected its configuration.
    #[error("helper configuration rejected: {0}")]
    Config(String),
    /// The helper's session store could not be accessed.
    #[error("session store error: {0}")]
    Store(String),
}

/// Port for the third-party OAuth helper.
#[async_trait]
pub trait OAuthHelper: Send + Sync {
    /// The current stored session for a provider, if any.
    ///
    /// Validity is the caller's concern; this returns whatever the
    /// helper has stored, expired or not. Idempotent: the helper's
    /// internal state is external to the bootstrapper.
    async fn stored_session(&self, provider: &str) -> Option<Session>;

    /// Configures the helper with a client identifier and redirect URI.
    ///
    /// # Errors
    /// Returns [`HelperError::Config`] if the helper rejects the
    /// configuration.
    async fn init(&self, config: &OAuthConfig) -> Result<(), HelperError>;

    /// Subscribes to authentication events.
    ///
    /// Events for logins and logouts arrive at arbitrary future times,
    /// driven by user actions inside the helper's own flow.
    fn subscribe(&self) -> broadcast::Receiver<AuthEvent>;
}
