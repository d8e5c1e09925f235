//! Liftoff Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod auth;
pub mod host;

pub use adapters::SystemClock;
pub use auth::FileSessionHelper;
pub use host::{ChannelAppHost, LoggingSetupRoutine};
