//! Config management use case

use crate::error::{Result, SavoryError};
use crate::infrastructure::{Config, FileStorage};

const KEYS: &str = "api_key, base_url, page_size";

/// Service for managing the data directory configuration
pub struct ConfigService {
    storage: FileStorage,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(storage: FileStorage) -> Self {
        ConfigService { storage }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.storage.load_config()?;

        match key {
            "api_key" => Ok(config.api_key.map(|k| mask(&k)).unwrap_or_default()),
            "base_url" => Ok(config.base_url),
            "page_size" => Ok(config.page_size.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(SavoryError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}, created",
                key, KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.storage.load_config()?;

        match key {
            "api_key" => {
                let value = value.trim();
                config.api_key = (!value.is_empty()).then(|| value.to_string());
            }
            "base_url" => {
                config.base_url = value.trim().trim_end_matches('/').to_string();
            }
            "page_size" => {
                config.page_size = value.trim().parse().map_err(|_| {
                    SavoryError::Config(format!("page_size must be a number, got '{}'", value))
                })?;
            }
            "created" => {
                return Err(SavoryError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(SavoryError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, KEYS
                )));
            }
        }

        config.validate()?;
        self.storage.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.storage.load_config()
    }
}

/// Show only the last four characters of a secret
pub fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}
