//! Search query validation and ingredient/dish classification

use crate::error::{Result, SavoryError};
use regex::Regex;
use std::sync::OnceLock;

/// Shortest query the API is asked about
pub const MIN_QUERY_LEN: usize = 2;

fn allowed_chars_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[\p{L}\s,'&-]+$").unwrap())
}

fn term_separator_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)\s*(?:,|&|\band\b)\s*").unwrap())
}

/// Words that name a dish rather than something you cook with
const DISH_WORDS: &[&str] = &[
    "bake", "bowl", "bread", "burger", "burgers", "burrito", "cake", "casserole", "chili",
    "cookies", "curry", "dumplings", "enchiladas", "fries", "lasagna", "muffins", "noodles",
    "omelette", "pancakes", "pasta", "pie", "pizza", "risotto", "roast", "salad", "sandwich",
    "smoothie", "soup", "stew", "stir", "sushi", "tacos", "tart", "wrap",
];

/// Common ingredients that are usually searched on their own
const INGREDIENT_WORDS: &[&str] = &[
    "apple", "avocado", "bacon", "banana", "basil", "beef", "broccoli", "butter", "carrot",
    "cheese", "chicken", "chickpeas", "eggs", "egg", "flour", "garlic", "ginger", "lamb",
    "lemon", "lentils", "milk", "mushroom", "mushrooms", "onion", "pork", "potato",
    "potatoes", "rice", "salmon", "shrimp", "spinach", "tofu", "tomato", "tomatoes", "tuna",
    "zucchini",
];

/// How a query should be sent to the recipe API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryKind {
    /// Ingredients on hand, lower-cased
    Ingredients(Vec<String>),
    /// A dish name or free text
    Dish,
}

/// A validated, trimmed search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    /// Validate raw user input
    pub fn parse(raw: &str) -> Result<Self> {
        let text = raw.trim();

        if text.is_empty() {
            return Err(SavoryError::EmptyQuery);
        }

        if text.chars().count() < MIN_QUERY_LEN {
            return Err(SavoryError::QueryTooShort);
        }

        if !allowed_chars_regex().is_match(text) {
            return Err(SavoryError::InvalidQuery(text.to_string()));
        }

        Ok(SearchQuery {
            text: text.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Guess whether the query lists ingredients or names a dish
    pub fn kind(&self) -> QueryKind {
        let terms: Vec<String> = term_separator_regex()
            .split(&self.text)
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        if terms.len() >= 2 {
            return QueryKind::Ingredients(terms);
        }

        let lower = self.text.to_lowercase();
        let words: Vec<&str> = lower.split_whitespace().collect();

        if words.len() >= 3 || words.last().is_some_and(|w| DISH_WORDS.contains(w)) {
            return QueryKind::Dish;
        }

        if words.iter().all(|w| INGREDIENT_WORDS.contains(w)) {
            return QueryKind::Ingredients(vec![words.join(" ")]);
        }

        QueryKind::Dish
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_rejected() {
        assert!(matches!(SearchQuery::parse(""), Err(SavoryError::EmptyQuery)));
        assert!(matches!(SearchQuery::parse("   "), Err(SavoryError::EmptyQuery)));
    }

    #[test]
    fn test_short_query_rejected() {
        assert!(matches!(SearchQuery::parse("a"), Err(SavoryError::QueryTooShort)));
        assert!(matches!(SearchQuery::parse("  a  "), Err(SavoryError::QueryTooShort)));
    }

    #[test]
    fn test_invalid_characters_rejected() {
        match SearchQuery::parse("xyz123") {
            Err(SavoryError::InvalidQuery(q)) => assert_eq!(q, "xyz123"),
            other => panic!("Expected InvalidQuery, got {:?}", other),
        }
        assert!(SearchQuery::parse("pasta; drop").is_err());
    }

    #[test]
    fn test_query_trimmed() {
        let query = SearchQuery::parse("  pasta  ").unwrap();
        assert_eq!(query.as_str(), "pasta");
    }

    #[test]
    fn test_accepts_accents_and_punctuation() {
        assert!(SearchQuery::parse("crème brûlée").is_ok());
        assert!(SearchQuery::parse("shepherd's pie").is_ok());
        assert!(SearchQuery::parse("mac & cheese").is_ok());
        assert!(SearchQuery::parse("stir-fry").is_ok());
    }

    #[test]
    fn test_comma_list_is_ingredients() {
        let query = SearchQuery::parse("Chicken, rice ,garlic").unwrap();
        assert_eq!(
            query.kind(),
            QueryKind::Ingredients(vec![
                "chicken".to_string(),
                "rice".to_string(),
                "garlic".to_string()
            ])
        );
    }

    #[test]
    fn test_and_separated_is_ingredients() {
        let query = SearchQuery::parse("tomato and basil").unwrap();
        assert_eq!(
            query.kind(),
            QueryKind::Ingredients(vec!["tomato".to_string(), "basil".to_string()])
        );
    }

    #[test]
    fn test_dish_names() {
        assert_eq!(SearchQuery::parse("pasta").unwrap().kind(), QueryKind::Dish);
        assert_eq!(SearchQuery::parse("chicken soup").unwrap().kind(), QueryKind::Dish);
        assert_eq!(
            SearchQuery::parse("classic beef burger").unwrap().kind(),
            QueryKind::Dish
        );
        assert_eq!(SearchQuery::parse("ratatouille").unwrap().kind(), QueryKind::Dish);
    }

    #[test]
    fn test_single_known_ingredient() {
        assert_eq!(
            SearchQuery::parse("Salmon").unwrap().kind(),
            QueryKind::Ingredients(vec!["salmon".to_string()])
        );
    }
}
