//! # API REST
//!
//! REST API for the lab record generator.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON rejection mapping, attachment headers, CORS)
//!
//! Document generation itself lives in `labrec-core`.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod routes;

pub use error::ApiError;
pub use routes::{router, ApiDoc, AppState};

use labrec_core::{port_from_env_value, CoreConfig, LabRecordService};
use std::net::SocketAddr;
use std::sync::Arc;

/// Process settings resolved once at startup.
#[derive(Clone, Debug)]
pub struct Settings {
    pub addr: SocketAddr,
    pub core: CoreConfig,
}

impl Settings {
    /// Resolve settings from the environment.
    ///
    /// # Environment Variables
    /// - `PORT`: listen port on all interfaces (default: 8000)
    /// - `LABREC_OUTPUT_DIR`: artifact store root (default: "generated_records")
    /// - `LABREC_LOGO_PATH`: logo file reported by `GET /` (default: "college_logo.png")
    /// - `LABREC_RETAIN_ARTIFACTS`: keep documents after responding (default: false)
    ///
    /// # Errors
    /// Returns an error if `PORT` or `LABREC_RETAIN_ARTIFACTS` cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = port_from_env_value(std::env::var("PORT").ok())?;
        let core = CoreConfig::from_env_values(
            std::env::var("LABREC_OUTPUT_DIR").ok(),
            std::env::var("LABREC_LOGO_PATH").ok(),
            std::env::var("LABREC_RETAIN_ARTIFACTS").ok(),
        )?;

        Ok(Self {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
            core,
        })
    }
}

/// Binds `settings.addr` and serves the REST API until the process is stopped.
///
/// # Errors
/// Returns an error if:
/// - the artifact store cannot be opened,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
pub async fn serve(settings: Settings) -> anyhow::Result<()> {
    tracing::info!(
        output_dir = %settings.core.output_dir().display(),
        retain_artifacts = settings.core.retain_artifacts(),
        "-- Starting lab record REST API on {}",
        settings.addr
    );

    let state = AppState {
        record_service: Arc::new(LabRecordService::new(Arc::new(settings.core))?),
    };

    let listener = tokio::net::TcpListener::bind(settings.addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
