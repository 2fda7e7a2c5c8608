//! Recipe search HTTP client

use crate::domain::{QueryKind, Recipe, SearchFilters, SearchQuery, SearchResponse};
use crate::error::{Result, SavoryError};
use crate::infrastructure::Config;
use reqwest::blocking::{Client, Response};
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use std::cell::OnceCell;
use std::time::Duration;

const SEARCH_FAILED: &str = "Failed to fetch recipes";
const DETAIL_FAILED: &str = "Failed to fetch recipe details";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Everything needed to ask for one page of results
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: SearchQuery,
    pub filters: SearchFilters,
    pub number: u32,
    pub offset: u32,
}

impl SearchRequest {
    /// Query parameters, without credentials
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("query", self.query.as_str().to_string()),
            ("number", self.number.to_string()),
            ("offset", self.offset.to_string()),
            ("addRecipeInformation", "true".to_string()),
        ];

        params.extend(self.filters.query_params());

        if let QueryKind::Ingredients(terms) = self.query.kind() {
            params.push(("includeIngredients", terms.join(",")));
        }

        params
    }
}

/// The external recipe service
pub trait RecipeApi {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse>;

    fn get_by_id(&self, id: u64) -> Result<Recipe>;
}

/// Error body the API sends with non-2xx responses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Spoonacular implementation of RecipeApi
pub struct SpoonacularClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SpoonacularClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(SpoonacularClient {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Build a client from config, failing when no API key is available
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.get_api_key().ok_or(SavoryError::MissingApiKey)?;
        Self::new(config.base_url.clone(), api_key)
    }

    pub fn search_url(&self, request: &SearchRequest) -> Result<Url> {
        let mut params = vec![("apiKey", self.api_key.clone())];
        params.extend(request.query_params());
        self.url(&format!("{}/complexSearch", self.base_url), &params)
    }

    pub fn detail_url(&self, id: u64) -> Result<Url> {
        let params = vec![("apiKey", self.api_key.clone())];
        self.url(&format!("{}/{}/information", self.base_url, id), &params)
    }

    fn url(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Url> {
        Url::parse_with_params(endpoint, params)
            .map_err(|e| SavoryError::Config(format!("Invalid base_url '{}': {}", self.base_url, e)))
    }

    fn get(&self, url: Url) -> Result<Response> {
        log::debug!("GET {}", redact(&url));
        let response = self.client.get(url).send()?;
        log::debug!("Response status {}", response.status());
        Ok(response)
    }
}

impl RecipeApi for SpoonacularClient {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let response = self.get(self.search_url(request)?)?;

        if !response.status().is_success() {
            return Err(failure(response, SEARCH_FAILED));
        }

        Ok(response.json()?)
    }

    fn get_by_id(&self, id: u64) -> Result<Recipe> {
        let response = self.get(self.detail_url(id)?)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(SavoryError::RecipeNotFound(id));
        }

        if !response.status().is_success() {
            return Err(failure(response, DETAIL_FAILED));
        }

        Ok(response.json()?)
    }
}

/// Client built on first use, so commands that never reach the API
/// work without an API key
pub struct LazyClient {
    config: Config,
    client: OnceCell<SpoonacularClient>,
}

impl LazyClient {
    pub fn new(config: Config) -> Self {
        LazyClient {
            config,
            client: OnceCell::new(),
        }
    }

    fn client(&self) -> Result<&SpoonacularClient> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let client = SpoonacularClient::from_config(&self.config)?;
        Ok(self.client.get_or_init(|| client))
    }
}

impl RecipeApi for LazyClient {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        self.client()?.search(request)
    }

    fn get_by_id(&self, id: u64) -> Result<Recipe> {
        self.client()?.get_by_id(id)
    }
}

/// Turn a failed response into an error, preferring the server's message
fn failure(response: Response, fallback: &str) -> SavoryError {
    let status = response.status();
    let body = response.text().unwrap_or_default();
    log::warn!("Recipe API returned {}", status);
    SavoryError::Api(error_message(&body, fallback))
}

fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|b| b.message.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// URL for logs, with the API key masked
fn redact(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let value = if k == "apiKey" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), value)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
