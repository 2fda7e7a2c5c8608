//! Infrastructure layer - External I/O and persistence

pub mod api;
pub mod config;
pub mod storage;

pub use api::{LazyClient, RecipeApi, SearchRequest, SpoonacularClient};
pub use config::Config;
pub use storage::{load_json, save_json, FileStorage, MemoryStorage, Storage};
