//! Favorites list

use crate::domain::Recipe;
use serde::{Deserialize, Serialize};

/// User-curated recipes, in the order they were added.
/// Ids are kept unique by `add`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    recipes: Vec<Recipe>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.recipes.iter().any(|r| r.id == id)
    }

    pub fn get(&self, id: u64) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Append the recipe unless one with the same id is already saved.
    /// Returns whether the list changed.
    pub fn add(&mut self, recipe: Recipe) -> bool {
        if self.contains(recipe.id) {
            return false;
        }
        self.recipes.push(recipe);
        true
    }

    /// Returns whether the list changed
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.recipes.len();
        self.recipes.retain(|r| r.id != id);
        self.recipes.len() != before
    }

    /// Flip the favorite state of a recipe, returning the new state
    pub fn toggle(&mut self, recipe: Recipe) -> bool {
        if self.remove(recipe.id) {
            false
        } else {
            self.add(recipe)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl From<Vec<Recipe>> for Favorites {
    /// Later duplicates of an id are dropped
    fn from(recipes: Vec<Recipe>) -> Self {
        let mut favorites = Favorites::new();
        for recipe in recipes {
            favorites.add(recipe);
        }
        favorites
    }
}
