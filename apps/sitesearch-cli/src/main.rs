use std::env;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sitesearch_core::config::{Config, Settings};
use sitesearch_core::content::ContentStore;
use sitesearch_core::traits::{ContentSource, SearchEngine};
use sitesearch_core::types::{ContentItem, ContentSources, FilterState, TypeFacet};
use sitesearch_core::validate::validate;
use sitesearch_filter::SiteSearch;

#[derive(Debug, Parser)]
#[command(name = "sitesearch", version, about = "Search the site's platforms, pages and articles")]
struct Cli {
    /// Directory holding config.toml and config.<env>.toml
    #[arg(long, global = true, default_value = ".")]
    config_dir: PathBuf,

    /// Content directory; overrides `content.dir`
    #[arg(long, global = true, env = "SITESEARCH_CONTENT_DIR")]
    content_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Filter the corpus by query, type and category
    Search(SearchArgs),
    /// List the categories present in the corpus
    Categories {
        #[arg(long)]
        json: bool,
    },
    /// Hit counts per category and per type for a query
    Facets(SearchArgs),
    /// Check the content collections for missing fields and reused paths
    Validate,
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Whitespace-separated terms; all of them must match
    #[arg(default_value = "")]
    query: String,

    /// all, platform, page or article
    #[arg(long = "type", short = 't', default_value = "all")]
    type_facet: TypeFacet,

    #[arg(long, short = 'c')]
    category: Option<String>,

    #[arg(long)]
    json: bool,
}

impl SearchArgs {
    fn filter_state(&self) -> FilterState {
        FilterState {
            query: self.query.clone(),
            type_facet: self.type_facet,
            category: self.category.clone(),
        }
    }
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_sources(store: &ContentStore, settings: &Settings) -> anyhow::Result<ContentSources> {
    let sources = store.load().with_context(|| format!("loading content from {}", store.dir().display()))?;
    if settings.content.validate {
        validate(&sources)?;
    }
    Ok(sources)
}

fn print_item(i: usize, item: &ContentItem, display_tags: usize) {
    println!("{:>2}. [{}] {}  ({})  category={}", i + 1, item.kind(), item.title(), item.path(), item.category());
    println!("    {}", item.description());
    if let ContentItem::Article(article) = item {
        let shown = article.display_tags(display_tags);
        if !shown.is_empty() { println!("    tags: {}", shown.join(", ")); }
        if !article.date.is_empty() { println!("    date: {}", article.date); }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
    let config = Config::load_in(&cli.config_dir, &env_name).map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let settings = config.settings()?;
    init_tracing(&settings);

    let content_dir = match cli.content_dir {
        Some(dir) => dir,
        None => config.content_dir()?,
    };
    let store = ContentStore::new(content_dir);

    match cli.command {
        Command::Validate => {
            let sources = store.load()?;
            validate(&sources)?;
            println!("✅ {} items in {} are valid", sources.len(), store.dir().display());
        }
        Command::Categories { json } => {
            let engine = SiteSearch::new(&load_sources(&store, &settings)?);
            if json {
                println!("{}", serde_json::to_string_pretty(engine.categories())?);
            } else {
                for category in engine.categories() { println!("{category}"); }
            }
        }
        Command::Search(args) => {
            let engine = SiteSearch::new(&load_sources(&store, &settings)?);
            let state = args.filter_state();
            tracing::debug!(?state, "running search");
            let results = engine.search(&state);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                println!("🔍 Found {} of {} items for \"{}\" (type={}, category={})",
                    results.len(), engine.len(), state.query, state.type_facet, state.category.as_deref().unwrap_or("any"));
                for (i, item) in results.iter().enumerate() { print_item(i, item, settings.search.display_tags); }
            }
        }
        Command::Facets(args) => {
            let engine = SiteSearch::new(&load_sources(&store, &settings)?);
            let state = args.filter_state();
            let by_category = engine.facet_counts(&state);
            let by_kind = engine.kind_counts(&state);
            if args.json {
                let value = serde_json::json!({
                    "categories": by_category.iter().map(|(c, n)| serde_json::json!({"category": c, "count": n})).collect::<Vec<_>>(),
                    "kinds": by_kind.iter().map(|(k, n)| serde_json::json!({"kind": k, "count": n})).collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("📊 Categories:");
                for (category, count) in by_category { println!("  {}: {} items", category, count); }
                println!("📊 Types:");
                for (kind, count) in by_kind { println!("  {}: {} items", kind, count); }
            }
        }
    }
    Ok(())
}
