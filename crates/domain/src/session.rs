//! Stored OAuth session record and its validity rule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A session stored by the OAuth helper.
///
/// The helper owns this record end to end; the bootstrapper is a
/// read-only consumer and never mutates it. Stored records may omit
/// either field, which serde maps to the empty token / epoch expiry,
/// both of which fail validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Session {
    /// Opaque access token issued by the provider.
    #[serde(default)]
    pub access_token: String,
    /// Expiry as a Unix timestamp in seconds.
    #[serde(default)]
    pub expires: i64,
}

impl Session {
    /// Creates a session from a token and a Unix expiry timestamp.
    #[must_use]
    pub fn new(access_token: impl Into<String>, expires: i64) -> Self {
        Self {
            access_token: access_token.into(),
            expires,
        }
    }

    /// Checks the validity rule: the token must be non-empty and
    /// `expires` must be strictly greater than `now` in seconds.
    /// No other check is performed.
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        !self.access_token.is_empty() && self.expires > now.timestamp()
    }

    /// Returns the token if the session passes the validity rule at `now`.
    #[must_use]
    pub fn valid_token_at(&self, now: DateTime<Utc>) -> Option<&str> {
        self.is_valid_at(now).then_some(self.access_token.as_str())
    }
}
