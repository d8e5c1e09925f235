//! In-process embedded application host.
//!
//! Stands in for the real embedded application: accepts the startup
//! flags, exposes the `githubOauthSuccess` port, and drains received
//! tokens into the log. Useful for running the bootstrapper end to end
//! without the actual frontend.

use async_trait::async_trait;
use liftoff_application::ports::{
    AppHost, AppPorts, HostError, MessagePort, MountPoint, OAUTH_SUCCESS_PORT,
};
use liftoff_domain::{AuthEvent, Flags};
use tokio::sync::mpsc;

/// Channel-backed application host.
#[derive(Debug, Clone)]
pub struct ChannelAppHost {
    mount_id: String,
}

impl ChannelAppHost {
    /// Creates a host exposing the default `root` mount slot.
    #[must_use]
    pub fn new() -> Self {
        Self::with_mount_id("root")
    }

    /// Creates a host exposing a single named mount slot.
    #[must_use]
    pub fn with_mount_id(mount_id: impl Into<String>) -> Self {
        Self {
            mount_id: mount_id.into(),
        }
    }
}

impl Default for ChannelAppHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AppHost for ChannelAppHost {
    async fn embed(&self, mount: &MountPoint, flags: Flags) -> Result<AppPorts, HostError> {
        if mount.id() != self.mount_id {
            return Err(HostError::MountNotFound(mount.id().to_string()));
        }

        tracing::info!(
            mount = mount.id(),
            authenticated = flags.is_authenticated(),
            "application embedded"
        );

        // Re-embedding replaces the previous instance: the old drain
        // task ends once its sender is dropped.
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        tokio::spawn(async move {
            while let Some(token) = rx.recv().await {
                tracing::info!(
                    port = OAUTH_SUCCESS_PORT,
                    token = %AuthEvent::token_preview(&token),
                    "token received"
                );
            }
        });

        Ok(AppPorts {
            oauth_success: MessagePort::new(OAUTH_SUCCESS_PORT, tx),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_embed_at_known_mount() {
        let host = ChannelAppHost::new();
        let ports = host
            .embed(&MountPoint::default(), Flags::anonymous())
            .await
            .unwrap();
        assert_eq!(ports.oauth_success.name(), "githubOauthSuccess");
    }

    #[tokio::test]
    async fn test_embed_twice_at_same_mount_succeeds() {
        let host = ChannelAppHost::new();
        let mount = MountPoint::default();
        let first = host.embed(&mount, Flags::anonymous()).await;
        let second = host
            .embed(&mount, Flags::new(Some("abc".to_string())))
            .await;
        assert!(first.is_ok());
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn test_embed_at_unknown_mount_fails() {
        let host = ChannelAppHost::new();
        let err = host
            .embed(&MountPoint::new("sidebar"), Flags::anonymous())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "mount point `sidebar` not found");
    }
}
