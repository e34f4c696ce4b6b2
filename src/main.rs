use anyhow::Result;
use tracing::info;
use wedding_site::{config::Config, server};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wedding_site=info".parse()?),
        )
        .init();

    info!("Starting wedding site");

    // Load configuration from environment
    let config = Config::from_env()?;
    info!(
        "Counting down to {} (assets from {})",
        config.wedding_date, config.assets_dir
    );

    server::run(config).await
}
