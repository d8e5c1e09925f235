//! Application bootstrapper use case.
//!
//! Wires the OAuth helper to the embedded application: reads any
//! existing valid session into the startup flags, embeds the
//! application, configures the helper, and forwards later login events
//! through the `githubOauthSuccess` message port.

use std::sync::Arc;

use liftoff_domain::{AuthEvent, Flags, GITHUB_PROVIDER, Profile};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::error::BootstrapResult;
use crate::ports::{AppHost, Clock, MessagePort, MountPoint, OAuthHelper, SetupRoutine};

/// The application bootstrapper.
///
/// All collaborators are injected; nothing is looked up through
/// ambient globals. The helper handle stays reachable after startup
/// through the returned [`BootstrapHandle`].
pub struct Bootstrapper<H, A, C, W> {
    helper: Arc<H>,
    host: A,
    clock: C,
    setup: W,
    profile: Profile,
    mount: MountPoint,
}

impl<H, A, C, W> Bootstrapper<H, A, C, W>
where
    H: OAuthHelper + 'static,
    A: AppHost,
    C: Clock,
    W: SetupRoutine,
{
    /// Creates a bootstrapper targeting the default `root` mount point.
    #[must_use]
    pub fn new(helper: Arc<H>, host: A, clock: C, setup: W, profile: Profile) -> Self {
        Self {
            helper,
            host,
            clock,
            setup,
            profile,
            mount: MountPoint::default(),
        }
    }

    /// Overrides the mount point the application embeds into.
    #[must_use]
    pub fn with_mount(mut self, mount: MountPoint) -> Self {
        self.mount = mount;
        self
    }

    /// The access token of the stored `github` session, if that session
    /// passes the validity rule right now.
    ///
    /// No side effects; may be called repeatedly. The helper owns the
    /// underlying session state.
    pub async fn existing_access_token(&self) -> Option<String> {
        let session = self.helper.stored_session(GITHUB_PROVIDER).await?;
        session
            .valid_token_at(self.clock.now())
            .map(ToString::to_string)
    }

    /// Runs the startup sequence.
    ///
    /// 1. Registers the setup routine (failure logged, not fatal).
    /// 2. Computes the startup flags from any existing valid session.
    /// 3. Embeds the application at the mount point with those flags.
    /// 4. Initializes the helper with the selected profile's credentials.
    /// 5. Spawns the event forwarder for login/logout events.
    ///
    /// # Errors
    /// Returns [`crate::BootstrapError`] when the host refuses to embed
    /// or the helper rejects its configuration.
    pub async fn initialize(self) -> BootstrapResult<BootstrapHandle<H>> {
        if let Err(error) = self.setup.register() {
            tracing::warn!(%error, "setup routine registration failed");
        }

        let flags = Flags::new(self.existing_access_token().await);
        tracing::debug!(
            authenticated = flags.is_authenticated(),
            mount = self.mount.id(),
            "embedding application"
        );
        let ports = self.host.embed(&self.mount, flags).await?;

        let config = self.profile.oauth_config();
        tracing::info!(
            profile = self.profile.name(),
            provider = %config.provider,
            redirect_uri = %config.redirect_uri,
            "initializing oauth helper"
        );
        self.helper.init(&config).await?;

        let events = self.helper.subscribe();
        let forwarder = tokio::spawn(forward_events(events, ports.oauth_success));

        Ok(BootstrapHandle {
            helper: self.helper,
            forwarder,
        })
    }
}

/// Consumes helper events until the helper drops its sender.
///
/// Successful logins push the token through the message port; every
/// failure reduces to a log line and nothing else.
async fn forward_events(mut events: broadcast::Receiver<AuthEvent>, port: MessagePort<String>) {
    loop {
        match events.recv().await {
            Ok(AuthEvent::LoginSucceeded(response)) => {
                let preview = AuthEvent::token_preview(&response.access_token);
                match port.send(response.access_token) {
                    Ok(()) => tracing::info!(token = %preview, "authenticated"),
                    Err(error) => tracing::warn!(%error, "login event dropped"),
                }
            }
            Ok(AuthEvent::LoginFailed(error)) => {
                tracing::warn!(%error, "something went wrong during login");
            }
            Ok(AuthEvent::LogoutSucceeded) => {
                // The app is not told about logouts yet; its state stays
                // stale until a manual refresh.
                tracing::info!("logged out");
            }
            Ok(AuthEvent::LogoutFailed(error)) => {
                tracing::warn!(%error, "something went wrong during logout");
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "auth event stream lagged");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

/// Handle returned by [`Bootstrapper::initialize`].
///
/// Keeps the helper reachable for ad hoc use after startup and owns
/// the forwarder task.
#[derive(Debug)]
pub struct BootstrapHandle<H> {
    helper: Arc<H>,
    forwarder: JoinHandle<()>,
}

impl<H> BootstrapHandle<H> {
    /// The OAuth helper instance.
    #[must_use]
    pub fn helper(&self) -> &Arc<H> {
        &self.helper
    }

    /// Stops the event forwarder and releases the helper handle.
    pub fn shutdown(self) {
        self.forwarder.abort();
    }

    /// Waits for the forwarder to finish (it ends when the helper
    /// drops its event channel).
    ///
    /// A forwarder that died instead of finishing is logged; abort
    /// via [`Self::shutdown`] stays silent.
    pub async fn join(self) {
        if let Err(error) = self.forwarder.await {
            if !error.is_cancelled() {
                tracing::error!(%error, "event forwarder terminated abnormally");
            }
        }
    }
}
