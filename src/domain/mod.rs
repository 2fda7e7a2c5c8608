//! Domain layer - Recipes, filters, queries and favorites

pub mod favorites;
pub mod filters;
pub mod query;
pub mod recipe;

pub use favorites::Favorites;
pub use filters::{Cuisine, Diet, FilterBadge, FilterKind, Intolerance, SearchFilters};
pub use query::{QueryKind, SearchQuery};
pub use recipe::{Ingredient, Recipe, SearchResponse};
