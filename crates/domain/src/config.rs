//! OAuth helper configuration profiles.
//!
//! Credentials are selected through enumerated named profiles rather
//! than environment-conditional branches, so every set of credentials
//! is live, named, and testable.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Provider key the bootstrapper reads sessions for.
pub const GITHUB_PROVIDER: &str = "github";

/// Named credential profile for the OAuth helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Local development against `lvh.me`.
    #[default]
    Development,
    /// The deployed explorer.
    Production,
}

impl Profile {
    /// Resolves a profile from its lowercase name.
    ///
    /// # Errors
    /// Returns [`DomainError::UnknownProfile`] for any other name.
    pub fn from_name(name: &str) -> DomainResult<Self> {
        match name {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(DomainError::UnknownProfile(other.to_string())),
        }
    }

    /// The profile's lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    /// The OAuth helper configuration for this profile.
    #[must_use]
    pub fn oauth_config(self) -> OAuthConfig {
        match self {
            Self::Development => OAuthConfig::new(
                GITHUB_PROVIDER,
                "55f0486a9967a2ac5715",
                "http://lvh.me:3002",
            ),
            Self::Production => OAuthConfig::new(
                GITHUB_PROVIDER,
                "143fcf6817394a7cf33f",
                "https://elm-explorer.netlify.com",
            ),
        }
    }
}

/// Configuration handed to the OAuth helper at initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthConfig {
    /// Provider key (e.g. "github").
    pub provider: String,
    /// OAuth application client identifier.
    pub client_id: String,
    /// Redirect URI registered with the provider.
    pub redirect_uri: String,
}

impl OAuthConfig {
    /// Creates a configuration for a provider.
    #[must_use]
    pub fn new(
        provider: impl Into<String>,
        client_id: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            client_id: client_id.into(),
            redirect_uri: redirect_uri.into(),
        }
    }
}
