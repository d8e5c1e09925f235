//! File-backed OAuth helper adapter.
//!
//! Sessions live in a single JSON file mapping provider keys to session
//! records, the same shape the browser helper keeps in local storage:
//! ```json
//! {
//!   "github": {
//!     "access_token": "abc123",
//!     "expires": 1700000000
//!   }
//! }
//! ```
//! The helper owns the popup flow in the browser rendition; here the
//! flow's outcomes are fed in through `complete_login` and friends,
//! which emit the corresponding events to all subscribers.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use liftoff_application::ports::{HelperError, OAuthHelper};
use liftoff_domain::{AuthError, AuthEvent, AuthResponse, OAuthConfig, Session};
use tokio::sync::{Mutex, RwLock, broadcast};

/// Capacity of the event channel; auth events are rare and slow
/// subscribers may lag without consequence.
const EVENT_CAPACITY: usize = 16;

/// File-backed OAuth helper.
#[derive(Debug)]
pub struct FileSessionHelper {
    path: PathBuf,
    events: broadcast::Sender<AuthEvent>,
    config: RwLock<Option<OAuthConfig>>,
    /// Serializes writers: `store_session` is a read-modify-write of
    /// the whole file, so concurrent writes would lose entries.
    write_lock: Mutex<()>,
}

impl FileSessionHelper {
    /// Creates a helper reading sessions from the given JSON file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            path: path.into(),
            events,
            config: RwLock::new(None),
            write_lock: Mutex::new(()),
        }
    }

    /// The path of the session store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The configuration passed to `init`, once initialized.
    pub async fn config(&self) -> Option<OAuthConfig> {
        self.config.read().await.clone()
    }

    /// Reads the whole session store. A missing or unreadable file is
    /// an empty store: the bootstrapper treats both as "no session".
    async fn load_store(&self) -> HashMap<String, Session> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_default(),
            Err(_) => HashMap::new(),
        }
    }

    /// Persists a session for a provider.
    ///
    /// # Errors
    /// Returns [`HelperError::Store`] when the file cannot be written.
    pub async fn store_session(
        &self,
        provider: &str,
        session: Session,
    ) -> Result<(), HelperError> {
        let _guard = self.write_lock.lock().await;
        let mut store = self.load_store().await;
        store.insert(provider.to_string(), session);
        let bytes = serde_json::to_vec_pretty(&store)
            .map_err(|e| HelperError::Store(e.to_string()))?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| HelperError::Store(e.to_string()))
    }

    /// Signals a completed login, as the popup flow would.
    pub fn complete_login(&self, response: AuthResponse) {
        // send only fails when nobody subscribed, which is fine
        let _ = self.events.send(AuthEvent::LoginSucceeded(response));
    }

    /// Signals a failed login.
    pub fn fail_login(&self, message: impl Into<String>) {
        let _ = self
            .events
            .send(AuthEvent::LoginFailed(AuthError::Login(message.into())));
    }

    /// Signals a completed logout.
    pub fn complete_logout(&self) {
        let _ = self.events.send(AuthEvent::LogoutSucceeded);
    }

    /// Signals a failed logout.
    pub fn fail_logout(&self, message: impl Into<String>) {
        let _ = self
            .events
            .send(AuthEvent::LogoutFailed(AuthError::Logout(message.into())));
    }
}

#[async_trait]
impl OAuthHelper for FileSessionHelper {
    async fn stored_session(&self, provider: &str) -> Option<Session> {
        self.load_store().await.remove(provider)
    }

    async fn init(&self, config: &OAuthConfig) -> Result<(), HelperError> {
        if config.client_id.is_empty() {
            return Err(HelperError::Config("empty client id".to_string()));
        }
        if config.redirect_uri.is_empty() {
            return Err(HelperError::Config("empty redirect uri".to_string()));
        }
        *self.config.write().await = Some(config.clone());
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }
}
