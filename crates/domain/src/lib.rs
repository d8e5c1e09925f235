//! Liftoff Domain - Core types for the application bootstrapper
//!
//! This crate defines the domain model shared by the bootstrapper:
//! stored OAuth sessions, startup flags, authentication events, and
//! configuration profiles. All types here are pure Rust with no I/O
//! dependencies.

pub mod auth;
pub mod config;
pub mod error;
pub mod flags;
pub mod session;

pub use auth::{AuthError, AuthEvent, AuthResponse};
pub use config::{GITHUB_PROVIDER, OAuthConfig, Profile};
pub use error::{DomainError, DomainResult};
pub use flags::Flags;
pub use session::Session;
