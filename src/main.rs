use anyhow::Result;
use persona_lens::{config, server};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Nothing is logged until the filter is known, so startup errors go to stderr
    let config = config::load().await.unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        process::exit(1);
    });

    let filter = config::log_filter(&config, |key| std::env::var(key).ok()).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(1);
    });

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&filter))
        .json()
        .init();

    info!(
        "Starting persona-lens with model {} (log filter: {})",
        config.llm.model, filter
    );

    server::run(config).await?;

    Ok(())
}
