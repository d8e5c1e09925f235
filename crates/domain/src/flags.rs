//! Startup flags handed to the embedded application.

use serde::{Deserialize, Serialize};

/// One-shot configuration payload computed at startup and passed to the
/// embedded application when it is mounted.
///
/// Immutable after creation. The wire name `accessToken` is part of the
/// embedded application's contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    /// Access token from an existing valid session, if any.
    #[serde(rename = "accessToken")]
    pub access_token: Option<String>,
}

impl Flags {
    /// Creates flags from an optional existing access token.
    #[must_use]
    pub const fn new(access_token: Option<String>) -> Self {
        Self { access_token }
    }

    /// Flags for a visitor with no stored session.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { access_token: None }
    }

    /// Returns true if the flags carry a token.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::anonymous()
    }
}
