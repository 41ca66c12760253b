//! Query fan-out and result composition

use crate::adapters::{
    CodeHostAdapter, DataPlatformAdapter, ModelHubAdapter, SourceAdapter,
};
use crate::network::HttpClient;
use crate::results::{AggregateResult, Citation, Item};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors visible at the aggregation boundary.
///
/// Remote failures never appear here: each adapter converts its own failure
/// modes into an empty contribution before results reach the aggregator.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// The query was empty or whitespace-only; no network activity happened.
    #[error("search query must be a non-empty string")]
    EmptyQuery,
    /// An adapter task failed in a way its error absorption did not cover.
    /// The message stays generic so transport details never reach the user.
    #[error("failed to search projects, please try again")]
    Internal,
}

/// Fans one query out to every adapter concurrently and merges the
/// contributions into a single capped result.
pub struct Aggregator {
    client: HttpClient,
    adapters: Vec<Arc<dyn SourceAdapter>>,
    max_results: usize,
}

impl Aggregator {
    /// Create an aggregator over the three standard sources, in fixed
    /// precedence order: code host, model hub, data platform.
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            adapters: vec![
                Arc::new(CodeHostAdapter::new()),
                Arc::new(ModelHubAdapter::new()),
                Arc::new(DataPlatformAdapter::new()),
            ],
            max_results: crate::MAX_RESULTS,
        }
    }

    /// Create an aggregator with per-source caps taken from settings.
    pub fn from_settings(client: HttpClient, settings: &crate::config::Settings) -> Self {
        let search = &settings.search;
        Self {
            client,
            adapters: vec![
                Arc::new(CodeHostAdapter::new().with_per_page(search.code_host_limit)),
                Arc::new(ModelHubAdapter::new().with_limits(search.model_limit, search.dataset_limit)),
                Arc::new(DataPlatformAdapter::new()),
            ],
            max_results: search.max_results,
        }
    }

    /// Create an aggregator over a custom adapter list (order is precedence).
    pub fn with_adapters(client: HttpClient, adapters: Vec<Arc<dyn SourceAdapter>>) -> Self {
        Self {
            client,
            adapters,
            max_results: crate::MAX_RESULTS,
        }
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Run one aggregation pass.
    ///
    /// Fails only on an invalid query or on an adapter task dying outside
    /// its own error absorption (panic); a degraded source just lowers its
    /// per-source count in the summary.
    pub async fn aggregate(&self, query: &str) -> Result<AggregateResult, AggregateError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AggregateError::EmptyQuery);
        }

        info!(
            "Aggregating '{}' across {} sources",
            query,
            self.adapters.len()
        );
        let start = Instant::now();

        // Fan out. Every adapter resolves (to an empty vec on failure), so
        // this is a join over tasks that cannot reject each other.
        let tasks: Vec<_> = self
            .adapters
            .iter()
            .map(|adapter| {
                let adapter = adapter.clone();
                let client = self.client.clone();
                let query = query.to_string();
                tokio::spawn(async move { adapter.search(&client, &query).await })
            })
            .collect();

        let mut per_source: Vec<Vec<Item>> = Vec::with_capacity(self.adapters.len());
        for (adapter, joined) in self.adapters.iter().zip(join_all(tasks).await) {
            match joined {
                Ok(items) => {
                    debug!("{} contributed {} items", adapter.name(), items.len());
                    per_source.push(items);
                }
                Err(e) => {
                    warn!("adapter task {} died: {}", adapter.name(), e);
                    return Err(AggregateError::Internal);
                }
            }
        }

        // Per-source counts reflect what was found, before the overall cap
        // preferentially drops the low-precedence tail.
        let counts: Vec<usize> = per_source.iter().map(Vec::len).collect();

        let items: Vec<Item> = per_source
            .into_iter()
            .flatten()
            .take(self.max_results)
            .collect();

        let citations: Vec<Citation> = items.iter().map(Citation::for_item).collect();

        let summary = self.build_summary(query, items.len(), &counts);

        debug!(
            "Aggregation for '{}' finished in {:?} with {} items",
            query,
            start.elapsed(),
            items.len()
        );

        let result = AggregateResult {
            summary,
            items,
            citations,
        };
        debug_assert!(result.citations_consistent());
        Ok(result)
    }

    /// One templated sentence: shown total plus found-per-source counts.
    fn build_summary(&self, query: &str, shown: usize, counts: &[usize]) -> String {
        let mut parts: Vec<String> = self
            .adapters
            .iter()
            .zip(counts)
            .map(|(adapter, count)| format!("{} from {}", count, adapter.source().label()))
            .collect();
        if parts.len() > 1 {
            let last = parts.len() - 1;
            parts[last] = format!("and {}", parts[last]);
        }

        format!(
            "Found {} resources for \"{}\": {}. \
             These are real, verified resources you can use for your projects!",
            shown,
            query,
            parts.join(", ")
        )
    }
}
