//! Strictly Mastermind frame server (HTTP, environment-configured)

use anyhow::Result;
use strictly_mastermind::ServerConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::default().with_env_overrides()?;

    info!("Starting Strictly Mastermind frame server on HTTP");
    info!(port = config.port(), "Server will listen on http://{}:{}", config.host(), config.port());

    strictly_mastermind::serve(config).await
}
