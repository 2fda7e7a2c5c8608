//! Favorites use case

use crate::application::search::RESULTS_KEY;
use crate::domain::{Favorites, Recipe};
use crate::error::Result;
use crate::infrastructure::{load_json, save_json, Storage};

pub const FAVORITES_KEY: &str = "favorites";

/// Result of flipping a recipe's favorite state
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleOutcome {
    pub favorites: Favorites,
    pub is_favorite: bool,
}

/// Service for the stored favorites list. Every call reads storage
/// afresh so all views agree on the current list.
pub struct FavoritesService<'a> {
    storage: &'a dyn Storage,
}

impl<'a> FavoritesService<'a> {
    pub fn new(storage: &'a dyn Storage) -> Self {
        FavoritesService { storage }
    }

    /// Stored favorites; missing or malformed data reads as an empty list
    pub fn list(&self) -> Favorites {
        let recipes: Vec<Recipe> = load_json(self.storage, FAVORITES_KEY);
        Favorites::from(recipes)
    }

    pub fn is_favorite(&self, id: u64) -> bool {
        self.list().contains(id)
    }

    /// Returns whether the recipe was newly added
    pub fn add(&self, recipe: Recipe) -> Result<bool> {
        let mut favorites = self.list();
        if !favorites.add(recipe) {
            return Ok(false);
        }
        self.save(&favorites)?;
        Ok(true)
    }

    /// Returns whether a recipe was removed
    pub fn remove(&self, id: u64) -> Result<bool> {
        let mut favorites = self.list();
        if !favorites.remove(id) {
            return Ok(false);
        }
        self.save(&favorites)?;
        Ok(true)
    }

    pub fn toggle(&self, recipe: Recipe) -> Result<ToggleOutcome> {
        let mut favorites = self.list();
        let is_favorite = favorites.toggle(recipe);
        self.save(&favorites)?;
        Ok(ToggleOutcome {
            favorites,
            is_favorite,
        })
    }

    /// Find a recipe already known locally, in favorites or the last results
    pub fn find_known(&self, id: u64) -> Option<Recipe> {
        if let Some(recipe) = self.list().get(id) {
            return Some(recipe.clone());
        }

        let results: Vec<Recipe> = load_json(self.storage, RESULTS_KEY);
        results.into_iter().find(|r| r.id == id)
    }

    fn save(&self, favorites: &Favorites) -> Result<()> {
        log::debug!("Saving {} favorite(s)", favorites.len());
        save_json(self.storage, FAVORITES_KEY, favorites)
    }
}
