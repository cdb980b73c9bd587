//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the lab record REST API on its own, without loading a `.env` file. The workspace's
//! main `labrec-run` binary is the usual entry point.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the lab record REST API server
///
/// # Errors
///
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the environment configuration is invalid, or
/// - the server fails to bind or run.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = api_rest::Settings::from_env()?;
    api_rest::serve(settings).await
}
