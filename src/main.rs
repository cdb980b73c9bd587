use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the lab record generator
///
/// Loads `.env` if present, initialises tracing and serves the REST API on `0.0.0.0:$PORT`.
///
/// # Environment Variables
/// - `PORT`: listen port (default: 8000)
/// - `LABREC_OUTPUT_DIR`: directory for generated documents (default: "generated_records")
/// - `LABREC_LOGO_PATH`: logo file reported by `GET /` (default: "college_logo.png")
/// - `LABREC_RETAIN_ARTIFACTS`: keep generated documents after responding (default: false)
/// - `RUST_LOG`: tracing filter
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, startup or the server itself fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("labrec_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("labrec_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = api_rest::Settings::from_env()?;
    tracing::info!("++ Starting lab record generator on {}", settings.addr);

    api_rest::serve(settings).await
}
