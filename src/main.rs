use clap::Parser;
use savory::application::manage_config::mask;
use savory::application::{
    init::init, ConfigService, FavoritesService, FilterService, RecipeDetailService, SearchService,
};
use savory::cli::{
    format_favorites, format_filter_options, format_filters, format_recipe_detail,
    format_search_session, Cli, Commands, FavoritesAction, FilterAction,
};
use savory::domain::{Cuisine, Diet, FilterKind, Intolerance, SearchFilters};
use savory::error::{Result, SavoryError};
use savory::infrastructure::{Config, FileStorage, LazyClient};
use std::path::Path;
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    });
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

/// Opened data directory plus the API client built from its config
struct Context {
    storage: FileStorage,
    api: LazyClient,
    page_size: u32,
}

impl Context {
    fn open(home: Option<&Path>) -> Result<Self> {
        let storage = FileStorage::discover(home)?;
        let config = storage.load_config()?;
        Ok(Context {
            page_size: config.page_size,
            api: LazyClient::new(config),
            storage,
        })
    }

    fn search(&self) -> SearchService<'_> {
        SearchService::new(&self.storage, &self.api, self.page_size)
    }

    fn filters(&self) -> FilterService<'_> {
        FilterService::new(&self.storage)
    }

    fn favorites(&self) -> FavoritesService<'_> {
        FavoritesService::new(&self.storage)
    }

    fn detail(&self) -> RecipeDetailService<'_> {
        RecipeDetailService::new(&self.storage, &self.api)
    }
}

fn run(cli: Cli) -> Result<()> {
    let home = cli.home.as_deref();

    match cli.command {
        Commands::Init { api_key } => {
            let storage = FileStorage::new(FileStorage::resolve_root(home)?);
            init(&storage, api_key)?;
            println!("Initialized savory data directory at {}", storage.root.display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let storage = FileStorage::discover(home)?;
            let service = ConfigService::new(storage);

            if list {
                print_config(&service.list()?);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    let shown = if k == "api_key" { mask(v.trim()) } else { v };
                    println!("Set {} = {}", k, shown);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: savory config [--list | <key> [<value>]]");
                println!("Valid keys: api_key, base_url, page_size");
                Ok(())
            }
        }
        Commands::Search {
            query,
            page,
            diet,
            cuisine,
            intolerances,
        } => {
            let ctx = Context::open(home)?;
            let filters = apply_filter_flags(&ctx.filters(), diet, cuisine, &intolerances)?;
            let session = ctx.search().search(&query.join(" "), page, &filters)?;
            print!("{}", with_newline(format_search_session(&session, &ctx.favorites().list())));
            Ok(())
        }
        Commands::Page { page } => {
            let ctx = Context::open(home)?;
            let filters = ctx.filters().current();
            let session = ctx.search().goto_page(page, &filters)?;
            print!("{}", with_newline(format_search_session(&session, &ctx.favorites().list())));
            Ok(())
        }
        Commands::Results => {
            let ctx = Context::open(home)?;
            let filters = ctx.filters().current();
            if filters.has_active() {
                println!("{}", format_filters(&filters));
            }
            let session = ctx.search().state();
            print!("{}", with_newline(format_search_session(&session, &ctx.favorites().list())));
            Ok(())
        }
        Commands::Clear => {
            let ctx = Context::open(home)?;
            ctx.search().clear()?;
            println!("Cleared search results");
            Ok(())
        }
        Commands::Show { id } => {
            let ctx = Context::open(home)?;
            let detail = ctx.detail().show(id)?;
            print!("{}", with_newline(format_recipe_detail(&detail)));
            Ok(())
        }
        Commands::Favorites { action } => {
            let ctx = Context::open(home)?;
            run_favorites(&ctx, action.unwrap_or(FavoritesAction::List))
        }
        Commands::Filters { action } => {
            let ctx = Context::open(home)?;
            run_filters(&ctx, action.unwrap_or(FilterAction::Show))
        }
    }
}

fn run_favorites(ctx: &Context, action: FavoritesAction) -> Result<()> {
    let favorites = ctx.favorites();

    match action {
        FavoritesAction::List => {
            print!("{}", with_newline(format_favorites(&favorites.list())));
        }
        FavoritesAction::Add { id } => {
            let recipe = ctx.detail().resolve(id)?;
            let title = recipe.title.clone();
            if favorites.add(recipe)? {
                println!("Added to favorites: {}", title);
            } else {
                println!("Already in favorites: {}", title);
            }
        }
        FavoritesAction::Remove { id } => {
            if favorites.remove(id)? {
                println!("Removed from favorites: {}", id);
            } else {
                println!("Not in favorites: {}", id);
            }
        }
        FavoritesAction::Toggle { id } => {
            let recipe = ctx.detail().resolve(id)?;
            let title = recipe.title.clone();
            let outcome = favorites.toggle(recipe)?;
            if outcome.is_favorite {
                println!("Added to favorites: {}", title);
            } else {
                println!("Removed from favorites: {}", title);
            }
            println!("{} favorite(s)", outcome.favorites.len());
        }
    }

    Ok(())
}

fn run_filters(ctx: &Context, action: FilterAction) -> Result<()> {
    let service = ctx.filters();

    let filters = match action {
        FilterAction::Show => {
            println!("{}", format_filters(&service.current()));
            return Ok(());
        }
        FilterAction::Options => {
            print!("{}", format_filter_options());
            return Ok(());
        }
        FilterAction::Diet { value } => service.set_diet(parse_optional::<Diet>(&value)?)?,
        FilterAction::Cuisine { value } => {
            service.set_cuisine(parse_optional::<Cuisine>(&value)?)?
        }
        FilterAction::Intolerance { value } => {
            service.toggle_intolerance(parse_filter::<Intolerance>(&value)?)?
        }
        FilterAction::Remove { kind, value } => {
            let kind = parse_filter::<FilterKind>(&kind)?;
            let value = match (kind, value) {
                (FilterKind::Intolerances, Some(v)) => Some(parse_filter::<Intolerance>(&v)?),
                _ => None,
            };
            service.remove(kind, value)?
        }
        FilterAction::Clear => service.clear()?,
    };

    println!("{}", format_filters(&filters));

    // A stored query is re-run whenever the filters change
    if let Some(session) = ctx.search().refresh(&filters)? {
        print!("{}", with_newline(format_search_session(&session, &ctx.favorites().list())));
    }

    Ok(())
}

/// Merge filters given on the search command line into the stored ones
fn apply_filter_flags(
    service: &FilterService<'_>,
    diet: Option<String>,
    cuisine: Option<String>,
    intolerances: &[String],
) -> Result<SearchFilters> {
    let mut filters = service.current();
    let changed = diet.is_some() || cuisine.is_some() || !intolerances.is_empty();

    if let Some(value) = diet {
        filters.set_diet(parse_optional::<Diet>(&value)?);
    }
    if let Some(value) = cuisine {
        filters.set_cuisine(parse_optional::<Cuisine>(&value)?);
    }
    for value in intolerances {
        let intolerance = parse_filter::<Intolerance>(value)?;
        if !filters.intolerances.contains(&intolerance) {
            filters.intolerances.push(intolerance);
        }
    }

    if changed {
        service.update(filters)
    } else {
        Ok(filters)
    }
}

fn parse_filter<T: FromStr<Err = String>>(value: &str) -> Result<T> {
    T::from_str(value).map_err(SavoryError::InvalidFilter)
}

/// "any" (or "none") clears a single-valued filter
fn parse_optional<T: FromStr<Err = String>>(value: &str) -> Result<Option<T>> {
    match value.trim().to_lowercase().as_str() {
        "any" | "none" | "" => Ok(None),
        _ => parse_filter(value).map(Some),
    }
}

fn print_config(config: &Config) {
    let api_key = config
        .api_key
        .as_deref()
        .map(mask)
        .unwrap_or_else(|| "(not set)".to_string());
    println!("api_key = {}", api_key);
    println!("base_url = {}", config.base_url);
    println!("page_size = {}", config.page_size);
    println!("created = {}", config.created.to_rfc3339());
}

fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
