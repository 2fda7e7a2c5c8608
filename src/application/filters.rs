//! Persisted filter selection

use crate::domain::{Cuisine, Diet, FilterKind, Intolerance, SearchFilters};
use crate::error::Result;
use crate::infrastructure::{load_json, save_json, Storage};

pub const FILTERS_KEY: &str = "recipe-finder-filters";

/// Service owning the stored filters. Every change is saved immediately
/// and the new selection returned, so the caller can re-run its search.
pub struct FilterService<'a> {
    storage: &'a dyn Storage,
}

impl<'a> FilterService<'a> {
    pub fn new(storage: &'a dyn Storage) -> Self {
        FilterService { storage }
    }

    /// Stored filters; missing or malformed data reads as no filters
    pub fn current(&self) -> SearchFilters {
        load_json(self.storage, FILTERS_KEY)
    }

    /// Replace the whole selection
    pub fn update(&self, filters: SearchFilters) -> Result<SearchFilters> {
        save_json(self.storage, FILTERS_KEY, &filters)?;
        Ok(filters)
    }

    pub fn set_diet(&self, diet: Option<Diet>) -> Result<SearchFilters> {
        self.modify(|f| f.set_diet(diet))
    }

    pub fn set_cuisine(&self, cuisine: Option<Cuisine>) -> Result<SearchFilters> {
        self.modify(|f| f.set_cuisine(cuisine))
    }

    pub fn toggle_intolerance(&self, intolerance: Intolerance) -> Result<SearchFilters> {
        self.modify(|f| {
            f.toggle_intolerance(intolerance);
        })
    }

    pub fn remove(&self, kind: FilterKind, value: Option<Intolerance>) -> Result<SearchFilters> {
        self.modify(|f| f.remove(kind, value))
    }

    pub fn clear(&self) -> Result<SearchFilters> {
        self.update(SearchFilters::default())
    }

    fn modify(&self, change: impl FnOnce(&mut SearchFilters)) -> Result<SearchFilters> {
        let mut filters = self.current();
        change(&mut filters);
        self.update(filters)
    }
}
