//! Staleness guard for the presentation boundary
//!
//! Aggregations in flight are never cancelled; a fast second query followed
//! by a slow first query's late resolution would otherwise surface stale
//! data. Each search takes a monotonic token and a resolution whose token is
//! no longer current is suppressed.

use super::aggregator::{AggregateError, Aggregator};
use crate::results::AggregateResult;
use std::sync::atomic::{AtomicU64, Ordering};

/// Serializes a consumer's searches and drops out-of-order completions.
///
/// Consumers should also reset any active [`crate::results::SourceFilter`]
/// back to `All` when a new search is issued.
pub struct SearchSession {
    aggregator: Aggregator,
    token: AtomicU64,
}

impl SearchSession {
    pub fn new(aggregator: Aggregator) -> Self {
        Self {
            aggregator,
            token: AtomicU64::new(0),
        }
    }

    /// Claim the token for a new search, invalidating all earlier ones.
    fn begin(&self) -> u64 {
        self.token.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether a claimed token is still the latest.
    fn is_current(&self, token: u64) -> bool {
        self.token.load(Ordering::SeqCst) == token
    }

    /// Run a search; returns `Ok(None)` when a newer search superseded this
    /// one while it was in flight.
    pub async fn search(&self, query: &str) -> Result<Option<AggregateResult>, AggregateError> {
        let token = self.begin();
        let result = self.aggregator.aggregate(query).await?;
        if !self.is_current(token) {
            return Ok(None);
        }
        Ok(Some(result))
    }
}
