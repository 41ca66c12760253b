//! Normalized result model shared by all adapters and the aggregator

mod filter;
mod types;

pub use filter::SourceFilter;
pub use types::{AggregateResult, Citation, Item, Source};
