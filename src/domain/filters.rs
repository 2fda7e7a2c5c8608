//! Diet, intolerance and cuisine filters narrowing a search

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lower-case a user supplied value and treat `-`, `_` and runs of spaces alike
fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

macro_rules! labelled_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Label as the recipe API expects it
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize(s);
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| normalize(v.label()) == wanted)
                    .ok_or_else(|| {
                        let valid: Vec<&str> = $name::ALL.iter().map(|v| v.label()).collect();
                        format!(
                            "Unknown {} '{}'. Valid values: {}",
                            $kind,
                            s,
                            valid.join(", ")
                        )
                    })
            }
        }
    };
}

labelled_enum!(
    /// Diets supported by the recipe API
    Diet, "diet" {
        GlutenFree => "Gluten Free",
        Ketogenic => "Ketogenic",
        Vegetarian => "Vegetarian",
        LactoVegetarian => "Lacto-Vegetarian",
        OvoVegetarian => "Ovo-Vegetarian",
        Vegan => "Vegan",
        Pescetarian => "Pescetarian",
        Paleo => "Paleo",
        Primal => "Primal",
        LowFodmap => "Low FODMAP",
        Whole30 => "Whole30",
    }
);

labelled_enum!(
    /// Ingredients a result must not contain
    Intolerance, "intolerance" {
        Dairy => "Dairy",
        Egg => "Egg",
        Gluten => "Gluten",
        Grain => "Grain",
        Peanut => "Peanut",
        Seafood => "Seafood",
        Sesame => "Sesame",
        Shellfish => "Shellfish",
        Soy => "Soy",
        Sulfite => "Sulfite",
        TreeNut => "Tree Nut",
        Wheat => "Wheat",
    }
);

labelled_enum!(
    Cuisine, "cuisine" {
        African => "African",
        Asian => "Asian",
        American => "American",
        British => "British",
        Cajun => "Cajun",
        Caribbean => "Caribbean",
        Chinese => "Chinese",
        EasternEuropean => "Eastern European",
        European => "European",
        French => "French",
        German => "German",
        Greek => "Greek",
        Indian => "Indian",
        Irish => "Irish",
        Italian => "Italian",
        Japanese => "Japanese",
        Jewish => "Jewish",
        Korean => "Korean",
        LatinAmerican => "Latin American",
        Mediterranean => "Mediterranean",
        Mexican => "Mexican",
        MiddleEastern => "Middle Eastern",
        Nordic => "Nordic",
        Southern => "Southern",
        Spanish => "Spanish",
        Thai => "Thai",
        Vietnamese => "Vietnamese",
    }
);

/// Which part of the filter set an operation addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Diet,
    Cuisine,
    Intolerances,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FilterKind::Diet => "diet",
            FilterKind::Cuisine => "cuisine",
            FilterKind::Intolerances => "intolerance",
        })
    }
}

impl FromStr for FilterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "diet" => Ok(FilterKind::Diet),
            "cuisine" => Ok(FilterKind::Cuisine),
            "intolerance" | "intolerances" => Ok(FilterKind::Intolerances),
            _ => Err(format!(
                "Unknown filter type '{}'. Valid types: diet, cuisine, intolerance",
                s
            )),
        }
    }
}

/// One active filter, as shown in the "Active Filters" line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBadge {
    pub kind: FilterKind,
    pub text: &'static str,
}

/// The current filter selection. `{}` on disk means no filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet: Option<Diet>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub intolerances: Vec<Intolerance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<Cuisine>,
}

impl SearchFilters {
    /// Number of active filters; each intolerance counts separately
    pub fn active_count(&self) -> usize {
        usize::from(self.diet.is_some())
            + usize::from(self.cuisine.is_some())
            + self.intolerances.len()
    }

    pub fn has_active(&self) -> bool {
        self.active_count() > 0
    }

    pub fn set_diet(&mut self, diet: Option<Diet>) {
        self.diet = diet;
    }

    pub fn set_cuisine(&mut self, cuisine: Option<Cuisine>) {
        self.cuisine = cuisine;
    }

    /// Add the intolerance if absent, remove it if present.
    /// Returns whether it is selected afterwards.
    pub fn toggle_intolerance(&mut self, intolerance: Intolerance) -> bool {
        if let Some(pos) = self.intolerances.iter().position(|i| *i == intolerance) {
            self.intolerances.remove(pos);
            false
        } else {
            self.intolerances.push(intolerance);
            true
        }
    }

    /// Remove a filter. For intolerances a value removes only that entry,
    /// no value removes them all.
    pub fn remove(&mut self, kind: FilterKind, value: Option<Intolerance>) {
        match (kind, value) {
            (FilterKind::Diet, _) => self.diet = None,
            (FilterKind::Cuisine, _) => self.cuisine = None,
            (FilterKind::Intolerances, Some(value)) => self.intolerances.retain(|i| *i != value),
            (FilterKind::Intolerances, None) => self.intolerances.clear(),
        }
    }

    pub fn clear(&mut self) {
        *self = SearchFilters::default();
    }

    /// Request parameters, in the order the API documents them
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(diet) = self.diet {
            params.push(("diet", diet.label().to_string()));
        }

        if !self.intolerances.is_empty() {
            let joined: Vec<&str> = self.intolerances.iter().map(|i| i.label()).collect();
            params.push(("intolerances", joined.join(",")));
        }

        if let Some(cuisine) = self.cuisine {
            params.push(("cuisine", cuisine.label().to_string()));
        }

        params
    }

    /// Active filters: diet, cuisine, then each intolerance
    pub fn badges(&self) -> Vec<FilterBadge> {
        let mut badges = Vec::with_capacity(self.active_count());

        if let Some(diet) = self.diet {
            badges.push(FilterBadge {
                kind: FilterKind::Diet,
                text: diet.label(),
            });
        }

        if let Some(cuisine) = self.cuisine {
            badges.push(FilterBadge {
                kind: FilterKind::Cuisine,
                text: cuisine.label(),
            });
        }

        for intolerance in &self.intolerances {
            badges.push(FilterBadge {
                kind: FilterKind::Intolerances,
                text: intolerance.label(),
            });
        }

        badges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_filters() -> SearchFilters {
        SearchFilters {
            diet: Some(Diet::Vegetarian),
            intolerances: vec![Intolerance::Dairy, Intolerance::Gluten],
            cuisine: Some(Cuisine::Italian),
        }
    }

    #[test]
    fn test_parse_labels_loosely() {
        assert_eq!(Diet::from_str("gluten-free").unwrap(), Diet::GlutenFree);
        assert_eq!(Diet::from_str("Low FODMAP").unwrap(), Diet::LowFodmap);
        assert_eq!(Diet::from_str("lacto_vegetarian").unwrap(), Diet::LactoVegetarian);
        assert_eq!(Intolerance::from_str("tree nut").unwrap(), Intolerance::TreeNut);
        assert_eq!(Cuisine::from_str("MIDDLE-EASTERN").unwrap(), Cuisine::MiddleEastern);
    }

    #[test]
    fn test_parse_unknown_lists_valid_values() {
        let err = Diet::from_str("carnivore").unwrap_err();
        assert!(err.contains("Unknown diet 'carnivore'"));
        assert!(err.contains("Whole30"));
    }

    #[test]
    fn test_active_count() {
        assert_eq!(SearchFilters::default().active_count(), 0);
        assert!(!SearchFilters::default().has_active());
        assert_eq!(full_filters().active_count(), 4);

        let only_diet = SearchFilters {
            diet: Some(Diet::Vegan),
            ..Default::default()
        };
        assert_eq!(only_diet.active_count(), 1);
    }

    #[test]
    fn test_toggle_intolerance_keeps_order() {
        let mut filters = SearchFilters::default();
        assert!(filters.toggle_intolerance(Intolerance::Egg));
        assert!(filters.toggle_intolerance(Intolerance::Soy));
        assert_eq!(filters.intolerances, vec![Intolerance::Egg, Intolerance::Soy]);

        assert!(!filters.toggle_intolerance(Intolerance::Egg));
        assert_eq!(filters.intolerances, vec![Intolerance::Soy]);
    }

    #[test]
    fn test_remove_single_intolerance() {
        let mut filters = full_filters();
        filters.remove(FilterKind::Intolerances, Some(Intolerance::Dairy));
        assert_eq!(filters.intolerances, vec![Intolerance::Gluten]);
        assert_eq!(filters.diet, Some(Diet::Vegetarian));
    }

    #[test]
    fn test_remove_all_intolerances_and_fields() {
        let mut filters = full_filters();
        filters.remove(FilterKind::Intolerances, None);
        filters.remove(FilterKind::Diet, None);
        assert!(filters.intolerances.is_empty());
        assert_eq!(filters.diet, None);
        assert_eq!(filters.active_count(), 1);

        filters.clear();
        assert_eq!(filters, SearchFilters::default());
    }

    #[test]
    fn test_query_params() {
        let params = full_filters().query_params();
        assert_eq!(
            params,
            vec![
                ("diet", "Vegetarian".to_string()),
                ("intolerances", "Dairy,Gluten".to_string()),
                ("cuisine", "Italian".to_string()),
            ]
        );
        assert!(SearchFilters::default().query_params().is_empty());
    }

    #[test]
    fn test_json_matches_stored_shape() {
        let json = serde_json::to_string(&full_filters()).unwrap();
        assert_eq!(
            json,
            r#"{"diet":"Vegetarian","intolerances":["Dairy","Gluten"],"cuisine":"Italian"}"#
        );

        assert_eq!(serde_json::to_string(&SearchFilters::default()).unwrap(), "{}");

        let parsed: SearchFilters =
            serde_json::from_str(r#"{"intolerances":["Tree Nut"],"cuisine":"Latin American"}"#)
                .unwrap();
        assert_eq!(parsed.intolerances, vec![Intolerance::TreeNut]);
        assert_eq!(parsed.cuisine, Some(Cuisine::LatinAmerican));
    }

    #[test]
    fn test_badges_order() {
        let badges = full_filters().badges();
        let texts: Vec<&str> = badges.iter().map(|b| b.text).collect();
        assert_eq!(texts, vec!["Vegetarian", "Italian", "Dairy", "Gluten"]);
        assert_eq!(badges.len(), full_filters().active_count());
    }

    #[test]
    fn test_filter_kind_parse() {
        assert_eq!(FilterKind::from_str("intolerances").unwrap(), FilterKind::Intolerances);
        assert_eq!(FilterKind::from_str("Diet").unwrap(), FilterKind::Diet);
        assert!(FilterKind::from_str("course").is_err());
    }
}
