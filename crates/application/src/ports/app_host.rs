//! Embedded application host port.
//!
//! The embedded application is opaque: it consumes the startup flags
//! once at embed time and receives runtime events through named
//! one-way message ports.

use async_trait::async_trait;
use liftoff_domain::Flags;
use thiserror::Error;
use tokio::sync::mpsc;

/// Name of the port carrying access tokens from successful logins.
pub const OAUTH_SUCCESS_PORT: &str = "githubOauthSuccess";

/// Identifier of the host slot the application embeds into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPoint {
    id: String,
}

impl MountPoint {
    /// Creates a mount point with the given element id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The mount point's id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Default for MountPoint {
    fn default() -> Self {
        Self::new("root")
    }
}

/// Errors surfaced by an application host adapter.
#[derive(Debug, Error)]
pub enum HostError {
    /// No mount slot exists with the requested id.
    #[error("mount point `{0}` not found")]
    MountNotFound(String),
    /// The application dropped its end of a message port.
    #[error("message port `{0}` is closed")]
    PortClosed(String),
    /// Embedding failed for a host-specific reason.
    #[error("embed failed: {0}")]
    Embed(String),
}

/// A named one-way channel from the bootstrapper into the embedded
/// application. Each send delivers exactly one payload.
#[derive(Debug, Clone)]
pub struct MessagePort<T> {
    name: &'static str,
    sender: mpsc::UnboundedSender<T>,
}

impl<T> MessagePort<T> {
    /// Creates a port over the sending half of a channel.
    #[must_use]
    pub const fn new(name: &'static str, sender: mpsc::UnboundedSender<T>) -> Self {
        Self { name, sender }
    }

    /// The port's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Sends one payload into the embedded application.
    ///
    /// # Errors
    /// Returns [`HostError::PortClosed`] if the application dropped
    /// its receiving end.
    pub fn send(&self, payload: T) -> Result<(), HostError> {
        self.sender
            .send(payload)
            .map_err(|_| HostError::PortClosed(self.name.to_string()))
    }
}

/// Inbound ports exposed by the embedded application after embedding.
#[derive(Debug)]
pub struct AppPorts {
    /// Receives one access token per successful login.
    pub oauth_success: MessagePort<String>,
}

/// Port for the host that embeds the application.
#[async_trait]
pub trait AppHost: Send + Sync {
    /// Embeds the application at `mount`, handing it `flags` once.
    ///
    /// Embedding a second time at the same mount point must succeed;
    /// the host replaces (or re-targets) whatever was there.
    ///
    /// # Errors
    /// Returns [`HostError`] if the mount slot is missing or the host
    /// cannot embed.
    async fn embed(&self, mount: &MountPoint, flags: Flags) -> Result<AppPorts, HostError>;
}
