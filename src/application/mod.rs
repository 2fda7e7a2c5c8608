//! Application layer - Use cases and orchestration

pub mod favorites;
pub mod filters;
pub mod init;
pub mod manage_config;
pub mod recipe_detail;
pub mod search;

pub use favorites::{FavoritesService, ToggleOutcome};
pub use filters::FilterService;
pub use manage_config::ConfigService;
pub use recipe_detail::{RecipeDetail, RecipeDetailService};
pub use search::{PageInfo, SearchService, SearchSession};
