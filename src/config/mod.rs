mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

pub async fn load() -> Result<Config> {
    // A missing .env is the normal case outside local development
    let _ = dotenvy::dotenv();

    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    let mut config = load_file(&config_path).await?;

    apply_env_overrides(&mut config, |key| env::var(key).ok())?;
    validate(&config)?;

    Ok(config)
}

/// Reads the YAML file at `path`, falling back to defaults when it does not exist.
pub async fn load_file(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();

    if !tokio::fs::try_exists(path).await? {
        debug!("No configuration file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Applies provider credentials and the listen port from the environment.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(api_key) = lookup("GEMINI_API_KEY").filter(|v| !v.is_empty()) {
        config.llm.api_key = api_key;
    }

    if let Some(access_key) = lookup("UNSPLASH_ACCESS_KEY").filter(|v| !v.is_empty()) {
        config.photos.access_key = Some(access_key);
    }

    if let Some(port) = lookup("PORT") {
        config.server.port = port
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
    }

    Ok(())
}

pub fn validate(config: &Config) -> Result<()> {
    if config.llm.api_key.trim().is_empty() {
        return Err(Error::config(
            "Missing model API key: set GEMINI_API_KEY or llm.api_key",
        ));
    }

    if config.llm.model.trim().is_empty() {
        return Err(Error::config("llm.model must not be empty"));
    }

    Ok(())
}

/// Chooses the tracing filter. `RUST_LOG` may hold full directives and wins over
/// `server.logs.level`, which must be a bare level.
pub fn log_filter<F>(config: &Config, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(directives) = lookup("RUST_LOG").filter(|v| !v.trim().is_empty()) {
        EnvFilter::try_new(&directives)
            .map_err(|e| Error::config(format!("Invalid RUST_LOG '{}': {}", directives, e)))?;
        return Ok(directives);
    }

    let level = config.server.logs.level.trim();
    level.parse::<LevelFilter>().map_err(|_| {
        Error::config(format!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        ))
    })?;

    Ok(level.to_string())
}
