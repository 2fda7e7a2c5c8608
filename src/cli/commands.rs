//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "savory")]
#[command(about = "Terminal recipe finder", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (default: $SAVORY_HOME or ~/.savory)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the data directory
    Init {
        /// Recipe API key to store in config.toml
        #[arg(long)]
        api_key: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Search recipes by dish name or ingredients (e.g. "chicken, rice")
    Search {
        /// Search text
        #[arg(value_name = "QUERY")]
        query: Vec<String>,

        /// Results page to show
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Diet filter, or "any" to clear it
        #[arg(long)]
        diet: Option<String>,

        /// Cuisine filter, or "any" to clear it
        #[arg(long)]
        cuisine: Option<String>,

        /// Intolerance to exclude (repeatable)
        #[arg(long = "intolerance", value_name = "INTOLERANCE")]
        intolerances: Vec<String>,
    },

    /// Show another page of the last search
    Page {
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },

    /// Show the last search results
    Results,

    /// Forget the last search
    Clear,

    /// Show full details of a recipe
    Show {
        /// Recipe id
        id: u64,
    },

    /// List or change favorites
    Favorites {
        #[command(subcommand)]
        action: Option<FavoritesAction>,
    },

    /// View or change search filters
    Filters {
        #[command(subcommand)]
        action: Option<FilterAction>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FavoritesAction {
    /// List favorite recipes
    List,

    /// Add a recipe to favorites
    Add { id: u64 },

    /// Remove a recipe from favorites
    Remove { id: u64 },

    /// Add or remove a recipe depending on its current state
    Toggle { id: u64 },
}

#[derive(Subcommand, Debug)]
pub enum FilterAction {
    /// Show active filters
    Show,

    /// Set the diet ("any" clears it)
    Diet { value: String },

    /// Set the cuisine ("any" clears it)
    Cuisine { value: String },

    /// Select or deselect an intolerance
    Intolerance { value: String },

    /// Remove one filter (diet, cuisine, intolerance [value])
    Remove {
        kind: String,
        value: Option<String>,
    },

    /// Remove all filters
    Clear,

    /// List the values each filter accepts
    Options,
}
