//! Embedded application host adapters.

mod channel_app_host;
mod logging_setup_routine;

pub use channel_app_host::ChannelAppHost;
pub use logging_setup_routine::LoggingSetupRoutine;
