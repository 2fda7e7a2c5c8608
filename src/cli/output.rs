//! Output formatting utilities

use crate::application::{RecipeDetail, SearchSession};
use crate::domain::{Cuisine, Diet, Favorites, Intolerance, Recipe, SearchFilters};
use regex::Regex;
use std::sync::OnceLock;

fn block_end_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)<br\s*/?>|</(?:p|li|ol|ul|div|h[1-6])>").unwrap())
}

fn tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"<[^>]*>").unwrap())
}

/// Plain text from the API's HTML summaries and instructions
pub fn strip_html(html: &str) -> String {
    let with_breaks = block_end_regex().replace_all(html, "\n");
    let text = tag_regex().replace_all(&with_breaks, "");
    let decoded = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    decoded
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per recipe: id, title, time, servings and a favorite marker
pub fn format_recipe_line(recipe: &Recipe, is_favorite: bool) -> String {
    let mut line = format!("{:>8}  {}", recipe.id, recipe.title);

    let mut meta = Vec::new();
    if recipe.ready_in_minutes > 0 {
        meta.push(format!("{} min", recipe.ready_in_minutes));
    }
    if recipe.servings > 0 {
        meta.push(format!("{} servings", recipe.servings));
    }
    if !meta.is_empty() {
        line.push_str(&format!(" ({})", meta.join(", ")));
    }

    if is_favorite {
        line.push_str("  ♥");
    }
    line
}

/// Format the stored or just-run search
pub fn format_search_session(session: &SearchSession, favorites: &Favorites) -> String {
    if session.recipes.is_empty() {
        if let Some(error) = &session.error {
            return format!(
                "{}\nTry using different keywords or check your spelling.",
                error
            );
        }
        if !session.last_query.is_empty() {
            return "No recipes found".to_string();
        }
        return "No search yet. Start with: savory search pasta".to_string();
    }

    let mut output = format!("Showing results for \"{}\"", session.last_query);
    let total_pages = session.page.total_pages();
    if total_pages > 0 {
        output.push_str(&format!(
            " (page {} of {}, {} total)",
            session.page.page(),
            total_pages,
            session.page.total_results
        ));
    }
    output.push('\n');

    for recipe in &session.recipes {
        output.push_str(&format_recipe_line(recipe, favorites.contains(recipe.id)));
        output.push('\n');
    }

    if session.page.has_next() {
        output.push_str(&format!(
            "More results: savory page {}\n",
            session.page.page() + 1
        ));
    }

    output
}

/// Format a full recipe
pub fn format_recipe_detail(detail: &RecipeDetail) -> String {
    let recipe = &detail.recipe;
    let mut output = String::new();

    output.push_str(&recipe.title);
    if detail.is_favorite {
        output.push_str("  ♥");
    }
    output.push('\n');

    let mut meta = vec![
        format!("{} minutes", recipe.ready_in_minutes),
        format!("{} servings", recipe.servings),
    ];
    if let Some(score) = recipe.health_score {
        meta.push(format!("Health score: {}", score));
    }
    output.push_str(&meta.join(" | "));
    output.push('\n');

    let tags = recipe.tags();
    if !tags.is_empty() {
        output.push_str(&format!("Tags: {}\n", tags.join(", ")));
    }

    output.push_str("\nAbout\n");
    output.push_str(&strip_html(&recipe.summary));
    output.push('\n');

    output.push_str("\nIngredients\n");
    if recipe.ingredients().is_empty() {
        output.push_str("No ingredients available.\n");
    } else {
        for ingredient in recipe.ingredients() {
            output.push_str(&format!("• {}\n", ingredient.original));
        }
    }

    output.push_str("\nInstructions\n");
    match recipe.instructions.as_deref().map(strip_html) {
        Some(text) if !text.is_empty() => {
            output.push_str(&text);
            output.push('\n');
        }
        _ => {
            output.push_str("No instructions available.");
            if let Some(url) = &recipe.source_url {
                output.push_str(&format!(" Check the original recipe for more details: {}", url));
            }
            output.push('\n');
        }
    }

    if let Some(name) = &recipe.source_name {
        match &recipe.source_url {
            Some(url) => output.push_str(&format!("\nSource: {} ({})\n", name, url)),
            None => output.push_str(&format!("\nSource: {}\n", name)),
        }
    }

    output
}

/// Format the favorites list
pub fn format_favorites(favorites: &Favorites) -> String {
    if favorites.is_empty() {
        return "No favorites yet\n\
            Start adding recipes with: savory favorites add <id>"
            .to_string();
    }

    let mut output = String::new();
    for recipe in favorites.iter() {
        output.push_str(&format_recipe_line(recipe, true));
        output.push('\n');
    }
    output
}

/// Format the active filter badges
pub fn format_filters(filters: &SearchFilters) -> String {
    if !filters.has_active() {
        return "No active filters".to_string();
    }

    let badges: Vec<String> = filters
        .badges()
        .iter()
        .map(|b| format!("[{}] {}", b.kind, b.text))
        .collect();

    format!(
        "Active Filters ({}): {}",
        filters.active_count(),
        badges.join("  ")
    )
}

/// Format the values each filter accepts
pub fn format_filter_options() -> String {
    let diets: Vec<&str> = Diet::ALL.iter().map(|d| d.label()).collect();
    let cuisines: Vec<&str> = Cuisine::ALL.iter().map(|c| c.label()).collect();
    let intolerances: Vec<&str> = Intolerance::ALL.iter().map(|i| i.label()).collect();

    format!(
        "Diets: {}\nCuisines: {}\nIntolerances: {}\n",
        diets.join(", "),
        cuisines.join(", "),
        intolerances.join(", ")
    )
}
