//! Normalized result type definitions

use serde::{Deserialize, Serialize};
use url::Url;

/// Origin of a discovered resource.
///
/// Closed enumeration: downstream rendering switches exhaustively on this
/// value, so adding a variant is a deliberate API change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    CodeHost,
    ModelHub,
    DataPlatform,
    Other,
}

impl Source {
    /// Human-readable platform label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CodeHost => "GitHub",
            Self::ModelHub => "Hugging Face",
            Self::DataPlatform => "Kaggle",
            Self::Other => "Other",
        }
    }

    /// Short badge glyph for compact rendering.
    pub fn badge(&self) -> &'static str {
        match self {
            Self::CodeHost => "[GH]",
            Self::ModelHub => "[HF]",
            Self::DataPlatform => "[KG]",
            Self::Other => "[??]",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One normalized discovered resource (repository, model, or dataset).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Display title, non-empty
    pub name: String,
    /// Human-readable summary, always populated (adapters synthesize one
    /// when the source lacks it)
    pub description: String,
    /// Platform the item came from
    pub source: Source,
    /// Canonical absolute link to the resource
    pub url: String,
    /// Short labels: source-provided first, adapter-appended after.
    /// Order matters, duplicates within one item are allowed.
    pub tags: Vec<String>,
    /// Popularity signal (star count), absent when the source has none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u64>,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        source: Source,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            source,
            url: url.into(),
            tags: Vec::new(),
            popularity: None,
        }
    }

    /// Set the tag list, preserving order
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_popularity(mut self, popularity: u64) -> Self {
        self.popularity = Some(popularity);
        self
    }

    /// Get the hostname from the URL
    pub fn hostname(&self) -> Option<String> {
        Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_string()))
    }
}

/// Provenance record paired 1:1 with a returned [`Item`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Citation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub uri: String,
}

impl Citation {
    /// Build a citation from an item (title = item name, uri = item url).
    pub fn for_item(item: &Item) -> Self {
        Self {
            title: Some(item.name.clone()),
            uri: item.url.clone(),
        }
    }

    /// Title for display, falling back to the URI's hostname when absent.
    pub fn display_title(&self) -> String {
        if let Some(ref title) = self.title {
            if !title.is_empty() {
                return title.clone();
            }
        }
        Url::parse(&self.uri)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_string()))
            .unwrap_or_else(|| self.uri.clone())
    }
}

/// Merged output of one aggregation pass.
///
/// Invariants: `items.len()` never exceeds the configured cap, and
/// `citations` is a positional 1:1 projection of `items`
/// (`citations[i].uri == items[i].url`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AggregateResult {
    /// Single templated sentence reporting total and per-source counts
    pub summary: String,
    /// Merged items in fixed source-precedence order
    pub items: Vec<Item>,
    /// One citation per item, same order
    pub citations: Vec<Citation>,
}

impl AggregateResult {
    /// Check the citation parity invariant. Used by tests and debug asserts.
    pub fn citations_consistent(&self) -> bool {
        self.citations.len() == self.items.len()
            && self
                .items
                .iter()
                .zip(self.citations.iter())
                .all(|(item, citation)| citation.uri == item.url)
    }
}
