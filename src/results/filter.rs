//! Client-side filtering over an already-fetched result set
//!
//! A pure view-layer projection: filtering never re-queries the aggregator.

use super::types::{Item, Source};

/// Filter over items by source.
///
/// `All` passes everything; a new search resets the active filter back to
/// `All` on the consumer side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceFilter {
    #[default]
    All,
    Only(Source),
}

impl SourceFilter {
    /// Whether an item passes this filter.
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Only(source) => item.source == *source,
        }
    }

    /// Project a slice of items through the filter, preserving order.
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}
