// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, warn};

use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};
use crate::error::ConversionError;
use crate::file_ops::load_data;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format: Format,
    pub input: Input,
}

/// How converted lists are written out
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Format {
    /// Joins decimal values and octets
    pub separator: String,
}

/// How raw input is prepared before parsing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Input {
    /// Trim surrounding whitespace from decimal, hex and binary input
    pub trim: bool,
}

impl Default for Format {
    fn default() -> Self {
        default_format()
    }
}

impl Default for Input {
    fn default() -> Self {
        default_input()
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config at runtime — falls back to defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if !Path::new(&config_path).exists() {
            debug!(path = %config_path, "no config file, using built-in defaults");
            return Config::default();
        }

        match load_from(&config_path) {
            Ok(conf) => conf,
            Err(err) => {
                warn!(%err, "unusable config file, using built-in defaults");
                Config::default()
            }
        }
    })
}

/// Parse a config file; missing fields take their defaults
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Config, ConversionError> {
    let path = path.as_ref();
    let content = load_data(path)?;
    toml::from_str(&content).map_err(|source| ConversionError::InvalidConfig {
        path: path.to_path_buf(),
        source,
    })
}
