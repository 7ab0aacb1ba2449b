use std::env;
use std::fs;

use serde::{Deserialize, Serialize};

use crate::constants::{API_URL_ENV, CONFIG_FILE};
use crate::error::{OctoError, OctoResult};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub api_url: Option<String>,
}

pub fn load_config() -> Config {
    let Some(home_dir) = dirs::home_dir() else {
        return Config::default();
    };
    let config_path = home_dir.join(CONFIG_FILE);

    if config_path.exists() {
        match fs::read_to_string(&config_path) {
            Ok(config_str) => serde_json::from_str(&config_str).unwrap_or_default(),
            Err(_) => Config::default(),
        }
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> OctoResult<()> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| OctoError::ConfigError("Could not find home directory".to_string()))?;
    let config_path = home_dir.join(CONFIG_FILE);

    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(config_path, config_str)?;

    Ok(())
}

/// Resolve the API base URL: environment variable first, then the config
/// file. Trailing slashes are stripped so callers can append paths.
pub fn get_api_url() -> OctoResult<String> {
    if let Ok(url) = env::var(API_URL_ENV) {
        return Ok(url.trim_end_matches('/').to_string());
    }

    let config = load_config();
    if let Some(url) = config.api_url {
        return Ok(url.trim_end_matches('/').to_string());
    }

    Err(OctoError::ApiUrlNotSet)
}
