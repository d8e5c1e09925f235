//! Liftoff Application - Ports and the bootstrapper use case
//!
//! This crate defines the port traits for the bootstrapper's external
//! collaborators and the startup sequence that wires them together.

pub mod bootstrap;
pub mod error;
pub mod ports;

pub use bootstrap::{BootstrapHandle, Bootstrapper};
pub use error::{BootstrapError, BootstrapResult};
