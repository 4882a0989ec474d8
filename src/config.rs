use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::client::PUBLIC_HORIZON_URL;
use crate::error::AccountError;
use crate::format::{DEFAULT_DECIMALS, DEFAULT_END_CHARS, DEFAULT_START_CHARS};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ClientConfig {
    #[serde(default = "default_horizon_url")]
    pub horizon_url: String,
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_horizon_url() -> String {
    PUBLIC_HORIZON_URL.to_string()
}

/// How keys and amounts are rendered by default.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_start_chars")]
    pub start_chars: usize,
    #[serde(default = "default_end_chars")]
    pub end_chars: usize,
    #[serde(default = "default_decimals")]
    pub decimals: u32,
}

fn default_start_chars() -> usize {
    DEFAULT_START_CHARS
}

fn default_end_chars() -> usize {
    DEFAULT_END_CHARS
}

fn default_decimals() -> u32 {
    DEFAULT_DECIMALS
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            start_chars: DEFAULT_START_CHARS,
            end_chars: DEFAULT_END_CHARS,
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            horizon_url: default_horizon_url(),
            display: DisplayConfig::default(),
        }
    }
}

impl ClientConfig {
    pub fn load(path: &str) -> Result<Self, AccountError> {
        let s = std::fs::read_to_string(path)?;
        toml::from_str(&s).map_err(|e| AccountError::Config(format!("{}: {}", path, e)))
    }

    pub fn save(&self, path: &str) -> Result<(), AccountError> {
        let s = toml::to_string_pretty(self).map_err(|e| AccountError::Config(e.to_string()))?;
        std::fs::write(path, s)?;
        Ok(())
    }

    pub fn load_or_default(path: &str) -> Self {
        if std::path::Path::new(path).exists() {
            match Self::load(path) {
                Ok(c) => {
                    info!("Config loaded from {}", path);
                    c
                }
                Err(e) => {
                    warn!("Error loading config: {}. Using defaults.", e);
                    Self::default()
                }
            }
        } else {
            info!("Config file not found at '{}'. Creating default.", path);
            let config = Self::default();
            if let Err(e) = config.save(path) {
                warn!("Could not write default config: {}", e);
            }
            config
        }
    }
}
