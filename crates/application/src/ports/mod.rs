//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the bootstrapper and its external
//! collaborators: the clock, the OAuth helper, the embedded application
//! host, and the startup setup routine. Each port is a trait implemented
//! by adapters in the infrastructure layer.

mod app_host;
mod clock;
mod oauth_helper;
mod setup_routine;

pub use app_host::{AppHost, AppPorts, HostError, MessagePort, MountPoint, OAUTH_SUCCESS_PORT};
pub use clock::Clock;
pub use oauth_helper::{HelperError, OAuthHelper};
pub use setup_routine::{SetupError, SetupRoutine};
