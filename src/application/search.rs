//! Search use case and the persisted search session

use crate::domain::{Recipe, SearchFilters, SearchQuery};
use crate::error::{Result, SavoryError};
use crate::infrastructure::{load_json, save_json, RecipeApi, SearchRequest, Storage};
use serde::{Deserialize, Serialize};

pub const RESULTS_KEY: &str = "searchResults";
pub const LAST_QUERY_KEY: &str = "lastQuery";
pub const ERROR_KEY: &str = "searchError";
pub const PAGE_KEY: &str = "searchPage";

pub const NO_RESULTS_MESSAGE: &str = "No recipes found. Try different ingredients or keywords.";

/// Position of the stored results within the full result set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub offset: u32,
    pub number: u32,
    pub total_results: u32,
}

impl PageInfo {
    /// 1-based page number
    pub fn page(&self) -> u32 {
        if self.number == 0 {
            1
        } else {
            self.offset / self.number + 1
        }
    }

    pub fn total_pages(&self) -> u32 {
        if self.number == 0 {
            0
        } else {
            self.total_results.div_ceil(self.number)
        }
    }

    pub fn has_next(&self) -> bool {
        self.page() < self.total_pages()
    }
}

/// Everything remembered about the last search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSession {
    pub recipes: Vec<Recipe>,
    pub last_query: String,
    pub error: Option<String>,
    pub page: PageInfo,
}

/// Service running searches and keeping the session in storage
pub struct SearchService<'a> {
    storage: &'a dyn Storage,
    api: &'a dyn RecipeApi,
    page_size: u32,
}

impl<'a> SearchService<'a> {
    pub fn new(storage: &'a dyn Storage, api: &'a dyn RecipeApi, page_size: u32) -> Self {
        SearchService {
            storage,
            api,
            page_size,
        }
    }

    /// Run a search for one page of results.
    ///
    /// The query is remembered even when it fails validation. Validation and
    /// HTTP failures are stored as the session error and returned; an empty
    /// result set is a successful search carrying the no-results message.
    pub fn search(
        &self,
        raw_query: &str,
        page: u32,
        filters: &SearchFilters,
    ) -> Result<SearchSession> {
        self.set_error(None)?;
        self.storage.set_item(LAST_QUERY_KEY, raw_query.trim())?;

        let query = match SearchQuery::parse(raw_query) {
            Ok(query) => query,
            Err(e) => {
                self.set_error(Some(&e.to_string()))?;
                return Err(e);
            }
        };

        let request = SearchRequest {
            query,
            filters: filters.clone(),
            number: self.page_size,
            offset: page.max(1).saturating_sub(1).saturating_mul(self.page_size),
        };

        log::info!(
            "Searching '{}' page {} with {} active filter(s)",
            request.query.as_str(),
            page,
            filters.active_count()
        );

        match self.api.search(&request) {
            Ok(response) => {
                let page = PageInfo {
                    offset: request.offset,
                    number: request.number,
                    total_results: response.total_results,
                };
                let error = response
                    .results
                    .is_empty()
                    .then(|| NO_RESULTS_MESSAGE.to_string());

                save_json(self.storage, RESULTS_KEY, &response.results)?;
                save_json(self.storage, PAGE_KEY, &page)?;
                self.set_error(error.as_deref())?;

                Ok(SearchSession {
                    recipes: response.results,
                    last_query: request.query.as_str().to_string(),
                    error,
                    page,
                })
            }
            Err(e) => {
                save_json(self.storage, RESULTS_KEY, &Vec::<Recipe>::new())?;
                self.storage.remove_item(PAGE_KEY)?;
                self.set_error(Some(&e.to_string()))?;
                Err(e)
            }
        }
    }

    /// Re-run the stored query with new filters, starting from the first page.
    /// Does nothing when no query is stored.
    pub fn refresh(&self, filters: &SearchFilters) -> Result<Option<SearchSession>> {
        let last_query = self.last_query();
        if last_query.is_empty() {
            return Ok(None);
        }
        self.search(&last_query, 1, filters).map(Some)
    }

    /// Fetch another page of the stored query
    pub fn goto_page(&self, page: u32, filters: &SearchFilters) -> Result<SearchSession> {
        let session = self.state();
        if session.last_query.is_empty() {
            return Err(SavoryError::EmptyQuery);
        }

        let total_pages = PageInfo {
            number: self.page_size,
            ..session.page
        }
        .total_pages();
        if page == 0 || (total_pages > 0 && page > total_pages) {
            return Err(SavoryError::PageOutOfRange { page, total_pages });
        }

        self.search(&session.last_query, page, filters)
    }

    /// The persisted session; malformed entries read as empty
    pub fn state(&self) -> SearchSession {
        SearchSession {
            recipes: load_json(self.storage, RESULTS_KEY),
            last_query: self.last_query(),
            error: self.read_text(ERROR_KEY),
            page: load_json(self.storage, PAGE_KEY),
        }
    }

    /// Forget results, query and error
    pub fn clear(&self) -> Result<()> {
        save_json(self.storage, RESULTS_KEY, &Vec::<Recipe>::new())?;
        self.storage.set_item(LAST_QUERY_KEY, "")?;
        self.storage.remove_item(PAGE_KEY)?;
        self.set_error(None)
    }

    fn last_query(&self) -> String {
        self.read_text(LAST_QUERY_KEY).unwrap_or_default()
    }

    /// Raw stored text; an unreadable entry is logged and reads as absent
    fn read_text(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).unwrap_or_else(|e| {
            log::warn!("Could not read '{}' from storage: {}", key, e);
            None
        })
    }

    fn set_error(&self, error: Option<&str>) -> Result<()> {
        match error {
            Some(message) => self.storage.set_item(ERROR_KEY, message),
            None => self.storage.remove_item(ERROR_KEY),
        }
    }
}
