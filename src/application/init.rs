//! Initialize data directory use case

use crate::error::Result;
use crate::infrastructure::{Config, FileStorage};

/// Create the data directory and its config
pub fn init(storage: &FileStorage, api_key: Option<String>) -> Result<Config> {
    storage.initialize()?;

    let config = Config::new(api_key);
    storage.save_config(&config)?;

    log::info!("Initialized data directory at {}", storage.root.display());

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_config() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().join("home"));

        let config = init(&storage, Some("key".to_string())).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("key"));
        assert!(storage.is_initialized());
        assert_eq!(storage.load_config().unwrap().api_key.as_deref(), Some("key"));
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().to_path_buf());

        init(&storage, None).unwrap();
        assert!(init(&storage, None).is_err());
    }
}
