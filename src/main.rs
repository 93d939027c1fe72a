use anyhow::{Context, Result};
use summarizer_api::{config, server, telemetry};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Logging depends on config, so config errors go to stderr
    let config = config::load()
        .await
        .context("Failed to load configuration")?;

    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = telemetry::log_filter(rust_log.as_deref(), &config.server.logs.level)?;
    telemetry::setup_logging(filter);

    info!(
        host = %config.server.host,
        port = config.server.port,
        model = %config.summarizer.model,
        "Starting summarizer API"
    );

    if let Err(e) = server::run(config).await {
        error!("Server failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
