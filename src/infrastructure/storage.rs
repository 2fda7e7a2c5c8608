//! Key/value storage for persisted application state

use crate::error::{Result, SavoryError};
use crate::infrastructure::config::{Config, CONFIG_FILE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at the data directory
pub const HOME_ENV: &str = "SAVORY_HOME";

/// Data directory name under the user's home
const DATA_DIR: &str = ".savory";

/// Subdirectory of the data directory holding one file per storage key
const STORAGE_DIR: &str = "storage";

/// String key/value store. Values are opaque text; callers decide
/// whether they hold JSON.
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Read a JSON value, treating missing or malformed data as the default
pub fn load_json<T>(storage: &dyn Storage, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            log::warn!("Could not read '{}' from storage: {}", key, e);
            return T::default();
        }
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        log::warn!("Ignoring malformed '{}' in storage: {}", key, e);
        T::default()
    })
}

/// Write a value as JSON
pub fn save_json<T: Serialize + ?Sized>(storage: &dyn Storage, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    storage.set_item(key, &raw)
}

/// File system implementation of Storage rooted at the data directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    pub root: PathBuf,
}

impl FileStorage {
    /// Create a storage with the given data directory
    pub fn new(root: PathBuf) -> Self {
        FileStorage { root }
    }

    /// Resolve the data directory: explicit override, then SAVORY_HOME,
    /// then ~/.savory
    pub fn resolve_root(home_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = home_override {
            return Ok(path.to_path_buf());
        }

        if let Ok(root) = std::env::var(HOME_ENV) {
            if !root.trim().is_empty() {
                return Ok(PathBuf::from(root));
            }
        }

        dirs::home_dir()
            .map(|home| home.join(DATA_DIR))
            .ok_or_else(|| {
                SavoryError::Config(format!(
                    "Cannot locate a home directory. Set {} or pass --home.",
                    HOME_ENV
                ))
            })
    }

    /// Open an initialized data directory
    pub fn discover(home_override: Option<&Path>) -> Result<Self> {
        let root = Self::resolve_root(home_override)?;
        let storage = FileStorage::new(root);

        if !storage.is_initialized() {
            return Err(SavoryError::NotInitialized(storage.root));
        }

        Ok(storage)
    }

    pub fn is_initialized(&self) -> bool {
        self.root.join(CONFIG_FILE).is_file()
    }

    /// Create the data directory layout
    pub fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(SavoryError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(self.root.join(STORAGE_DIR))?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn item_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(SavoryError::Config(format!("Invalid storage key: '{}'", key)));
        }
        Ok(self.root.join(STORAGE_DIR).join(key))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.item_path(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SavoryError::Io(e)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.item_path(key)?;

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        log::debug!("Writing storage key '{}' ({} bytes)", key, value.len());
        fs::write(&path, value).map_err(SavoryError::Io)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.item_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SavoryError::Io(e)),
        }
    }
}

/// In-memory Storage, used where nothing should touch the disk
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
