//! Configuration loading from file system

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use super::defaults::DEFAULT_CONFIG_PATH;
use super::types::Config;
use crate::error::{ButtonKitError, Result};

/// Resolved path of the config file
pub fn config_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).as_ref())
}

/// Read and parse a config file
pub fn read_config(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path).map_err(|source| ButtonKitError::ConfigRead {
        path: path.display().to_string(),
        source,
    })?;
    let config = serde_json::from_str(&contents)?;
    Ok(config)
}

/// Load configuration from ~/.button-kit/config.json
///
/// Returns Config::default() if the file is missing or invalid.
#[instrument(name = "load_config")]
pub fn load_config() -> Config {
    load_config_from(&config_path())
}

/// Load configuration from `path`, falling back to defaults on any failure
pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        info!(path = %path.display(), "Config file not found, using defaults");
        return Config::default();
    }

    match read_config(path) {
        Ok(config) => {
            info!(path = %path.display(), "Successfully loaded config");
            config
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "Failed to load config, using defaults"
            );
            Config::default()
        }
    }
}
