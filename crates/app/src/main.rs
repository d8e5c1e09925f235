//! Liftoff binary.
//!
//! Composition root: wires the file-backed OAuth helper, the channel
//! application host, the system clock, and the setup routine into the
//! bootstrapper, then parks until interrupted.

use std::sync::Arc;

use liftoff_application::Bootstrapper;
use liftoff_domain::Profile;
use liftoff_infrastructure::{
    ChannelAppHost, FileSessionHelper, LoggingSetupRoutine, SystemClock,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get configuration from environment
    let profile = match std::env::var("LIFTOFF_PROFILE") {
        Ok(name) => Profile::from_name(&name)?,
        Err(_) => Profile::default(),
    };
    let session_file = std::env::var("LIFTOFF_SESSION_FILE")
        .unwrap_or_else(|_| "sessions.json".to_string());

    tracing::info!(
        profile = profile.name(),
        session_file = %session_file,
        "starting Liftoff v{}",
        env!("CARGO_PKG_VERSION")
    );

    let helper = Arc::new(FileSessionHelper::new(session_file));
    let bootstrapper = Bootstrapper::new(
        Arc::clone(&helper),
        ChannelAppHost::new(),
        SystemClock::new(),
        LoggingSetupRoutine::new(),
        profile,
    );
    let handle = bootstrapper.initialize().await?;

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");
    handle.shutdown();

    Ok(())
}
