//! DevScout-RS: a multi-source project discovery aggregator
//!
//! Fans one free-text query out to GitHub, Hugging Face, and Kaggle
//! concurrently, normalizes the heterogeneous responses into one shared item
//! shape, and composes a capped, cited result set with a synthesized summary.

pub mod adapters;
pub mod aggregate;
pub mod config;
pub mod network;
pub mod results;

pub use aggregate::{AggregateError, Aggregator, SearchSession};
pub use config::Settings;
pub use network::HttpClient;
pub use results::{AggregateResult, Citation, Item, Source, SourceFilter};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Overall cap on merged items per aggregation
pub const MAX_RESULTS: usize = 9;
