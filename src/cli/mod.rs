//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, FavoritesAction, FilterAction};
pub use output::{
    format_favorites, format_filter_options, format_filters, format_recipe_detail,
    format_search_session,
};
