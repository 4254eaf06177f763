mod types;

pub use types::*;

use crate::Result;
use std::{env, io::ErrorKind, path::Path};
use tracing::debug;

/// Loads the configuration file named by `CONFIG_PATH` (default `config.yaml`)
/// and applies the `OLLAMA_HOST` override.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = load_from(&config_path).await?;
    apply_env_overrides(&mut config, env::var("OLLAMA_HOST").ok());

    Ok(config)
}

/// Reads a YAML config file. A missing or empty file yields the defaults.
pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No configuration file at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };

    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }

    Ok(serde_yaml::from_str(&config_str)?)
}

/// An unset or blank `OLLAMA_HOST` leaves the configured host in place.
pub fn apply_env_overrides(config: &mut Config, ollama_host: Option<String>) {
    if let Some(host) = ollama_host.filter(|h| !h.trim().is_empty()) {
        config.ollama.host = host.trim().to_string();
    }
}
