//! Recipe records as returned by the recipe API and stored as favorites

use serde::{Deserialize, Serialize};

/// A dish record. Search results may only carry id, title and image,
/// so every other field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub ready_in_minutes: u32,
    #[serde(default)]
    pub servings: u32,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_ingredients: Option<Vec<Ingredient>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dish_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diets: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisines: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
}

impl Recipe {
    /// Minimal recipe with only the fields every record carries
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Recipe {
            id,
            title: title.into(),
            image: String::new(),
            ready_in_minutes: 0,
            servings: 0,
            summary: String::new(),
            instructions: None,
            extended_ingredients: None,
            dish_types: None,
            diets: None,
            cuisines: None,
            health_score: None,
            source_url: None,
            source_name: None,
        }
    }

    /// Ingredient lines, empty when the record has none
    pub fn ingredients(&self) -> &[Ingredient] {
        self.extended_ingredients.as_deref().unwrap_or(&[])
    }

    /// Diet and dish type tags, in display order
    pub fn tags(&self) -> Vec<&str> {
        self.diets
            .iter()
            .flatten()
            .chain(self.dish_types.iter().flatten())
            .map(String::as_str)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub original: String,
}

/// One page of search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<Recipe>,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub total_results: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_search_result() {
        let json = r#"{"id": 1, "title": "Classic Beef Burger", "image": "burger.jpg"}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, 1);
        assert_eq!(recipe.title, "Classic Beef Burger");
        assert_eq!(recipe.ready_in_minutes, 0);
        assert!(recipe.ingredients().is_empty());
    }

    #[test]
    fn test_parse_full_detail() {
        let json = r#"{
            "id": 716429,
            "title": "Pasta with Garlic",
            "image": "pasta.jpg",
            "readyInMinutes": 45,
            "servings": 2,
            "summary": "<b>Tasty</b> pasta",
            "extendedIngredients": [
                {"id": 1001, "name": "butter", "amount": 1.0, "unit": "tbsp", "original": "1 tbsp butter"}
            ],
            "dishTypes": ["lunch", "main course"],
            "diets": ["vegetarian"],
            "healthScore": 19.0,
            "sourceUrl": "https://example.com/pasta",
            "sourceName": "Example Kitchen"
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.ready_in_minutes, 45);
        assert_eq!(recipe.ingredients()[0].original, "1 tbsp butter");
        assert_eq!(recipe.tags(), vec!["vegetarian", "lunch", "main course"]);
        assert_eq!(recipe.source_name.as_deref(), Some("Example Kitchen"));
    }

    #[test]
    fn test_serialize_omits_missing_optionals() {
        let recipe = Recipe::new(3, "Toast");
        let json = serde_json::to_string(&recipe).unwrap();
        assert!(json.contains("\"readyInMinutes\":0"));
        assert!(!json.contains("instructions"));
        assert!(!json.contains("healthScore"));
    }

    #[test]
    fn test_search_response_defaults() {
        let json = r#"{"results": [{"id": 2, "title": "Soup"}], "totalResults": 1}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.total_results, 1);
        assert_eq!(response.offset, 0);
    }
}
