//! Recipe detail use case

use crate::application::FavoritesService;
use crate::domain::Recipe;
use crate::error::Result;
use crate::infrastructure::{RecipeApi, Storage};

/// A full recipe with its favorite state
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDetail {
    pub recipe: Recipe,
    pub is_favorite: bool,
}

pub struct RecipeDetailService<'a> {
    api: &'a dyn RecipeApi,
    favorites: FavoritesService<'a>,
}

impl<'a> RecipeDetailService<'a> {
    pub fn new(storage: &'a dyn Storage, api: &'a dyn RecipeApi) -> Self {
        RecipeDetailService {
            api,
            favorites: FavoritesService::new(storage),
        }
    }

    /// Fetch full details from the API
    pub fn show(&self, id: u64) -> Result<RecipeDetail> {
        let recipe = self.api.get_by_id(id)?;
        let is_favorite = self.favorites.is_favorite(recipe.id);
        Ok(RecipeDetail {
            recipe,
            is_favorite,
        })
    }

    /// A locally known recipe if there is one, otherwise the API's
    pub fn resolve(&self, id: u64) -> Result<Recipe> {
        match self.favorites.find_known(id) {
            Some(recipe) => Ok(recipe),
            None => self.api.get_by_id(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::search::tests::StubApi;
    use crate::error::SavoryError;
    use crate::infrastructure::MemoryStorage;

    #[test]
    fn test_show_reports_favorite_state() {
        let storage = MemoryStorage::new();
        let api = StubApi::with_results(vec![Recipe::new(5, "Greek Salad")]);
        let service = RecipeDetailService::new(&storage, &api);

        let detail = service.show(5).unwrap();
        assert_eq!(detail.recipe.title, "Greek Salad");
        assert!(!detail.is_favorite);

        FavoritesService::new(&storage)
            .add(detail.recipe.clone())
            .unwrap();
        assert!(service.show(5).unwrap().is_favorite);
    }

    #[test]
    fn test_show_missing_recipe() {
        let storage = MemoryStorage::new();
        let api = StubApi::default();
        let service = RecipeDetailService::new(&storage, &api);

        assert!(matches!(service.show(99), Err(SavoryError::RecipeNotFound(99))));
    }

    #[test]
    fn test_show_propagates_api_error() {
        let storage = MemoryStorage::new();
        let api = StubApi::failing("Failed to fetch recipe details");
        let service = RecipeDetailService::new(&storage, &api);

        let err = service.show(1).unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch recipe details");
    }

    #[test]
    fn test_resolve_prefers_local_copy() {
        let storage = MemoryStorage::new();
        FavoritesService::new(&storage)
            .add(Recipe::new(3, "Saved Stew"))
            .unwrap();
        let api = StubApi::failing("offline");
        let service = RecipeDetailService::new(&storage, &api);

        assert_eq!(service.resolve(3).unwrap().title, "Saved Stew");
        assert!(service.resolve(4).is_err());
    }
}
