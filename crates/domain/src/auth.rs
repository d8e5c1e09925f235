//! Authentication events and failures emitted by the OAuth helper.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payload delivered on a successful login event.
///
/// Transient: exists only for the duration of event handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The freshly issued access token.
    pub access_token: String,
}

impl AuthResponse {
    /// Creates a response carrying the given token.
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }
}

/// The two observed failure kinds, as reported by the OAuth helper.
///
/// Both are logged and otherwise swallowed: no retry, no propagation,
/// no user-facing recovery beyond what the helper itself shows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// A login attempt failed inside the helper.
    #[error("login failed: {0}")]
    Login(String),
    /// A logout attempt failed inside the helper.
    #[error("logout failed: {0}")]
    Logout(String),
}

/// Typed authentication events, replacing success/failure callback pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// A login completed and produced a token.
    LoginSucceeded(AuthResponse),
    /// A login attempt failed.
    LoginFailed(AuthError),
    /// A logout completed. The embedded application is not notified;
    /// its state stays stale until a manual refresh.
    LogoutSucceeded,
    /// A logout attempt failed.
    LogoutFailed(AuthError),
}

impl AuthEvent {
    /// Returns true for the failure variants.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::LoginFailed(_) | Self::LogoutFailed(_))
    }

    /// Short token preview safe for logging (first 8 chars).
    ///
    /// Tokens are opaque and need not be ASCII, so this counts chars
    /// rather than slicing by byte offset.
    #[must_use]
    pub fn token_preview(token: &str) -> String {
        if token.chars().count() > 12 {
            let head: String = token.chars().take(8).collect();
            format!("{head}...")
        } else {
            token.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_failure_variants() {
        assert!(AuthEvent::LoginFailed(AuthError::Login("denied".into())).is_failure());
        assert!(AuthEvent::LogoutFailed(AuthError::Logout("denied".into())).is_failure());
        assert!(!AuthEvent::LoginSucceeded(AuthResponse::new("abc")).is_failure());
        assert!(!AuthEvent::LogoutSucceeded.is_failure());
    }

    #[test]
    fn test_token_preview_truncates() {
        assert_eq!(
            AuthEvent::token_preview("0123456789abcdef"),
            "01234567...".to_string()
        );
        assert_eq!(AuthEvent::token_preview("short"), "short".to_string());
    }

    #[test]
    fn test_token_preview_handles_multibyte_tokens() {
        // Tokens are opaque; a multi-byte char straddling the cut must
        // not panic and the preview must keep whole chars.
        assert_eq!(
            AuthEvent::token_preview("abcdefgéhijklmn"),
            "abcdefgé...".to_string()
        );
        assert_eq!(AuthEvent::token_preview("ééééééééééééé"), "éééééééé...");
        assert_eq!(AuthEvent::token_preview("ééé"), "ééé");
    }

    #[test]
    fn test_auth_error_messages() {
        assert_eq!(
            AuthError::Login("popup closed".into()).to_string(),
            "login failed: popup closed"
        );
        assert_eq!(
            AuthError::Logout("network".into()).to_string(),
            "logout failed: network"
        );
    }
}
