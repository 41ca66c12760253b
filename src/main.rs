//! DevScout-RS: a multi-source project discovery aggregator
//!
//! This is the main entry point, a thin console consumer of the
//! aggregation core.

use anyhow::Result;
use devscout_rs::{
    config::{self, Settings},
    Aggregator, HttpClient, Source, SourceFilter,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let (filter, query) = match parse_args() {
        Some(parsed) => parsed,
        None => {
            print_usage();
            std::process::exit(2);
        }
    };

    // Load configuration and install it globally
    let (settings, settings_path) = load_settings()?;
    config::init(settings)?;
    let settings = config::get();

    // Initialize logging; the debug flag widens the default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.general.log_filter())),
        )
        .with_target(false)
        .init();

    info!(
        "Starting {} v{}",
        settings.general.instance_name,
        devscout_rs::VERSION
    );
    match settings_path {
        Some(path) => info!("Loaded settings from: {}", path.display()),
        None => info!("No settings file found, using defaults"),
    }

    // Initialize HTTP client and aggregator
    let client = HttpClient::with_settings(&settings.outgoing)?;
    let aggregator = Aggregator::from_settings(client, settings);

    let result = aggregator.aggregate(&query).await?;

    println!("{}\n", result.summary);

    for item in filter.apply(&result.items) {
        let popularity = item
            .popularity
            .map(|stars| format!("  ({} stars)", stars))
            .unwrap_or_default();
        println!("{} {}{}", item.source.badge(), item.name, popularity);
        println!("    {}", item.description);
        println!("    {}", item.url);
        if !item.tags.is_empty() {
            println!("    tags: {}", item.tags.join(", "));
        }
        println!();
    }

    println!("Sources:");
    for citation in &result.citations {
        println!("  {} <{}>", citation.display_title(), citation.uri);
    }

    Ok(())
}

/// Parse `[--source <name>] <query...>` from the command line
fn parse_args() -> Option<(SourceFilter, String)> {
    let mut args = std::env::args().skip(1).peekable();
    let mut filter = SourceFilter::All;

    if args.peek().map(String::as_str) == Some("--source") {
        args.next();
        let source = match args.next()?.to_lowercase().as_str() {
            "github" => Source::CodeHost,
            "huggingface" => Source::ModelHub,
            "kaggle" => Source::DataPlatform,
            _ => return None,
        };
        filter = SourceFilter::Only(source);
    }

    let query = args.collect::<Vec<_>>().join(" ");
    if query.trim().is_empty() {
        return None;
    }
    Some((filter, query))
}

/// Load settings from file or use defaults, reporting the source path
fn load_settings() -> Result<(Settings, Option<PathBuf>)> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        dirs::config_dir()
            .map(|p| p.join("devscout-rs/settings.yml"))
            .unwrap_or_default(),
    ];

    // Environment variable takes precedence
    if let Ok(path) = std::env::var("DEVSCOUT_SETTINGS_PATH") {
        paths.insert(0, PathBuf::from(path));
    }

    for path in paths {
        if path.exists() {
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok((settings, Some(path)));
        }
    }

    let mut settings = Settings::default();
    settings.merge_env();
    Ok((settings, None))
}

/// Print usage information
fn print_usage() {
    eprintln!(
        r#"DevScout-RS v{}
A multi-source project discovery aggregator

USAGE:
    devscout-rs [--source <github|huggingface|kaggle>] <query>...

ENVIRONMENT VARIABLES:
    DEVSCOUT_SETTINGS_PATH   Path to settings.yml
    DEVSCOUT_DEBUG           Enable debug mode (true/false)
    DEVSCOUT_REQUEST_TIMEOUT Outgoing request timeout in seconds
    DEVSCOUT_MAX_RESULTS     Overall cap on merged results
"#,
        devscout_rs::VERSION
    );
}
