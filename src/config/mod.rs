mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::path::Path;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from `CONFIG_PATH` (or `config.yaml`) and applies
/// environment overrides.
pub async fn load() -> Result<Config> {
    load_with(DEFAULT_CONFIG_PATH, |key| env::var(key).ok()).await
}

/// Same as [`load`] with the fallback path and environment lookup injected.
///
/// When `CONFIG_PATH` is unset and `default_path` does not exist, built-in
/// defaults are used. An explicitly named file must exist.
pub async fn load_with<F>(default_path: &str, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match lookup("CONFIG_PATH") {
        Some(path) => load_from_path(&path).await?,
        None if Path::new(default_path).exists() => load_from_path(default_path).await?,
        None => {
            debug!("No configuration file at {}, using defaults", default_path);
            Config::default()
        }
    };

    apply_env_overrides(&mut config, &lookup)?;

    Ok(config)
}

pub async fn load_from_path(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Overrides selected settings from the environment. `lookup` is injected so
/// tests don't have to mutate process-wide state.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(api_key) = lookup("SUMMARIZER_API_KEY") {
        config.summarizer.api_key = Some(api_key);
    }
    if let Some(base_url) = lookup("SUMMARIZER_BASE_URL") {
        config.summarizer.base_url = base_url;
    }
    if let Some(model) = lookup("SUMMARIZER_MODEL") {
        config.summarizer.model = model;
    }
    if let Some(port) = lookup("PORT") {
        config.server.port = port
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
    }
    Ok(())
}
