#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the survey dashboard data.
//!
//! ```text
//! resolve_map load
//! resolve_map options water-points waterSuff [--lang ar]
//! resolve_map values water waterSuff _7 [--lang ar]
//! resolve_map filter water-points --select waterSuff=Sufficient [--out dir]
//! resolve_map filter fire-points --criteria '{"acqDate":{"kind":"dateRange","start":"2024-07-01"}}'
//! resolve_map show farmers-points 42 [--lang ar]
//! resolve_map cache stats|clear
//! resolve_map state show|language <lang>|layer <layer> <true|false>
//! ```
//!
//! Settings come from an optional `resolve_map.toml`; `RUST_LOG` controls
//! log verbosity.

mod config;
mod progress;
mod sink;

use std::path::PathBuf;

use chrono::Duration;
use clap::{Parser, Subcommand};
use resolve_map_data::{
    Cache, CacheBackend, Fetcher, FileCache, FileFetcher, HttpFetcher, Loader, MemoryCache,
    UiState, registry,
};
use resolve_map_filter::{FilterSession, filter_options};
use resolve_map_filter_models::{ActiveFilters, FilterCriterion, FilterField};
use resolve_map_normalize::schema::{clean_label, format_value, property_label};
use resolve_map_survey_models::{FeatureStore, Language, LayerId, Theme};

use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::progress::LogProgress;
use crate::sink::ExportSink;

#[derive(Parser)]
#[command(
    name = "resolve_map",
    about = "Load, filter and export the bilingual survey layers"
)]
struct Cli {
    /// Config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Directory the data paths are relative to
    #[arg(long, global = true)]
    data_root: Option<PathBuf>,

    /// Fetch data over HTTP from this base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Skip the on-disk cache
    #[arg(long, global = true)]
    no_cache: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load every layer and print what loaded
    Load,
    /// List the options of a multi-select filter field
    Options {
        /// Layer id (e.g. water-points)
        layer: LayerId,
        /// Field name (e.g. waterSuff)
        field: FilterField,
        /// Display language (defaults to the saved UI language)
        #[arg(long)]
        lang: Option<Language>,
    },
    /// List the distinct labels of a theme property
    Values {
        /// Theme (water, energy, food, general, regen)
        theme: Theme,
        /// Property keys to try, in order
        #[arg(required = true)]
        keys: Vec<String>,
        /// Display language (defaults to the saved UI language)
        #[arg(long)]
        lang: Option<Language>,
    },
    /// Filter a layer and export the result as GeoJSON
    Filter {
        /// Layer id (e.g. farmers-points)
        layer: LayerId,
        /// Criteria as a JSON object keyed by field name
        #[arg(long)]
        criteria: Option<String>,
        /// Add a multi-select value, as field=value (repeatable)
        #[arg(long = "select", value_parser = parse_selection)]
        selections: Vec<(FilterField, String)>,
        /// Display language (defaults to the saved UI language)
        #[arg(long)]
        lang: Option<Language>,
        /// Write `<layer>.geojson` here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print one feature's properties with display labels
    Show {
        /// Layer id
        layer: LayerId,
        /// Feature id (`featureId`, `source_row` or the GeoJSON id)
        id: String,
        /// Display language (defaults to the saved UI language)
        #[arg(long)]
        lang: Option<Language>,
    },
    /// Inspect or clear the data cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
    /// Inspect or change the saved UI state
    State {
        #[command(subcommand)]
        action: StateAction,
    },
}

#[derive(Subcommand)]
enum CacheAction {
    /// Print entry count, size and ages
    Stats,
    /// Remove every entry
    Clear,
}

#[derive(Subcommand)]
enum StateAction {
    /// Print the saved state
    Show,
    /// Save the display language
    Language {
        /// en or ar
        lang: Language,
    },
    /// Save a layer's visibility
    Layer {
        /// Layer id
        layer: LayerId,
        /// Whether the layer is shown
        #[arg(action = clap::ArgAction::Set)]
        visible: bool,
    },
}

fn parse_selection(s: &str) -> Result<(FilterField, String), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected field=value, got {s}"))?;
    let field = field
        .trim()
        .parse::<FilterField>()
        .map_err(|_| format!("unknown filter field: {field}"))?;
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("empty value for {field}"));
    }
    Ok((field, value.to_string()))
}

/// Merges `--criteria` JSON and `--select` values into one filter set.
fn build_criteria(
    criteria: Option<&str>,
    selections: Vec<(FilterField, String)>,
) -> Result<ActiveFilters, serde_json::Error> {
    let mut filters: ActiveFilters = match criteria {
        Some(json) => serde_json::from_str(json)?,
        None => ActiveFilters::new(),
    };

    for (field, value) in selections {
        if let Some(FilterCriterion::MultiSelect { values }) = filters.get_mut(field) {
            values.insert(value);
            continue;
        }
        filters.set(field, FilterCriterion::multi_select([value]));
    }

    Ok(filters)
}

fn build_cache(config: &Config, no_cache: bool) -> Cache {
    let backend: Box<dyn CacheBackend> = if no_cache {
        Box::new(MemoryCache::new())
    } else {
        Box::new(FileCache::new(config.cache_dir.clone()))
    };
    Cache::new(backend)
        .with_ttl(Duration::days(config.cache_ttl_days))
        .with_version(config.data_version.clone())
}

fn build_loader(config: &Config, no_cache: bool) -> Loader<Box<dyn Fetcher>> {
    let fetcher: Box<dyn Fetcher> = match &config.base_url {
        Some(url) => Box::new(HttpFetcher::new(url.clone())),
        None => Box::new(FileFetcher::new(config.data_root.clone())),
    };
    Loader::new(fetcher, build_cache(config, no_cache)).with_progress(LogProgress::shared())
}

/// Loads every layer while restoring the saved UI state.
async fn load(config: &Config, no_cache: bool) -> (FeatureStore, UiState) {
    let loader = build_loader(config, no_cache);
    let registry = registry();

    let ((store, report), ui) = tokio::join!(
        loader.load_all(&registry),
        UiState::load(&config.ui_state_path)
    );

    if !report.is_complete() {
        for (layer, reason) in &report.failures {
            eprintln!("warning: {layer} is unavailable: {reason}");
        }
    }

    (store, ui)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let mut config = Config::load(&cli.config)?;
    if let Some(root) = cli.data_root {
        config.data_root = root;
    }
    if let Some(url) = cli.base_url {
        config.base_url = Some(url);
    }

    match cli.command {
        Commands::Load => {
            let loader = build_loader(&config, cli.no_cache);
            let (store, report) = loader.load_all(&registry()).await;

            println!("{:<22} {:>9}", "LAYER", "FEATURES");
            println!("{}", "-".repeat(32));
            for layer in store.loaded_layers() {
                let count = store.resolve(layer).map_or(0, |resolved| resolved.features.len());
                println!("{:<22} {count:>9}", layer.as_ref());
            }
            for (layer, reason) in &report.failures {
                println!("\n{layer} failed: {reason}");
            }
        }
        Commands::Options { layer, field, lang } => {
            let (store, ui) = load(&config, cli.no_cache).await;
            let language = lang.unwrap_or(ui.language);

            let options = filter_options(&store, layer, field, language)?;
            if options.is_empty() {
                println!("No options for {field} on {layer}.");
                return Ok(());
            }
            for option in &options {
                println!("{:<40} {}", option.label, option.code);
            }
            println!("\n{} option(s)", options.len());
        }
        Commands::Values { theme, keys, lang } => {
            let (store, ui) = load(&config, cli.no_cache).await;
            let language = lang.unwrap_or(ui.language);
            let session = FilterSession::new(store, ExportSink::new(None), language);

            let candidates: Vec<&str> = keys.iter().map(String::as_str).collect();
            for value in session.unique_values(theme, &candidates)? {
                println!("{value}");
            }
        }
        Commands::Filter {
            layer,
            criteria,
            selections,
            lang,
            out,
        } => {
            let filters = build_criteria(criteria.as_deref(), selections)?;
            let (store, mut ui) = load(&config, cli.no_cache).await;
            let language = lang.unwrap_or(ui.language);

            let mut session = FilterSession::new(store, ExportSink::new(out), language);
            session.toggle_layer(layer, true)?;
            for (field, criterion) in filters.iter() {
                session.set_criterion(layer, field, criterion.clone())?;
            }
            let outcome = session.set_filter_enabled(layer, true)?;

            let mut sink = session.into_sink();
            let written = sink.flush()?;
            eprintln!(
                "{}: {} of {} features",
                outcome.layer, outcome.count, outcome.total
            );
            for path in written {
                eprintln!("wrote {}", path.display());
            }

            ui.set_layer_visible(layer, true);
            if let Err(e) = ui.save(&config.ui_state_path).await {
                log::warn!("Failed to save UI state: {e}");
            }
        }
        Commands::Show { layer, id, lang } => {
            let (store, ui) = load(&config, cli.no_cache).await;
            let language = lang.unwrap_or(ui.language);

            let Some(resolved) = store.resolve(layer) else {
                eprintln!("No data loaded for {layer}");
                std::process::exit(1);
            };
            let Some(feature) = resolved
                .features
                .iter()
                .find(|feature| feature.stable_id().as_deref() == Some(id.as_str()))
            else {
                eprintln!("Feature not found: {id}");
                std::process::exit(1);
            };

            for (key, value) in feature.properties.dictionary(language) {
                let label = property_label(layer, key, language);
                println!(
                    "{:<40} {}",
                    clean_label(&label),
                    format_value(value, key, language)
                );
            }
        }
        Commands::Cache { action } => {
            let cache = build_cache(&config, cli.no_cache);
            match action {
                CacheAction::Stats => {
                    let stats = cache.stats().await;
                    println!("{}", serde_json::to_string_pretty(&stats)?);
                }
                CacheAction::Clear => {
                    cache.clear().await;
                    println!("Cache cleared.");
                }
            }
        }
        Commands::State { action } => {
            let mut ui = UiState::load(&config.ui_state_path).await;
            match action {
                StateAction::Show => {
                    println!("{}", serde_json::to_string_pretty(&ui)?);
                    return Ok(());
                }
                StateAction::Language { lang } => ui.language = lang,
                StateAction::Layer { layer, visible } => ui.set_layer_visible(layer, visible),
            }
            ui.save(&config.ui_state_path).await?;
            println!("Saved {}", config.ui_state_path.display());
        }
    }

    Ok(())
}
