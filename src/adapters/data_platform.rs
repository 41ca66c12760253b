//! Data-platform (Kaggle) adapter
//!
//! Kaggle's API requires authentication this client does not carry, so no
//! live request is ever made. Queries are matched against a small curated
//! keyword table; misses fall back to one generic item deep-linking the
//! platform's own search page. The adapter is total: it never fails and
//! never returns an empty sequence.
//!
//! Strategy seam: swapping this for an authenticated client later only means
//! replacing this one `SourceAdapter` impl.

use super::traits::SourceAdapter;
use crate::network::HttpClient;
use crate::results::{Item, Source};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use tracing::debug;

/// One curated entry in the keyword table
struct CuratedEntry {
    name: &'static str,
    description: &'static str,
    url: &'static str,
}

/// Curated keyword table, matched in declaration order.
static CURATED: Lazy<Vec<(&'static str, Vec<CuratedEntry>)>> = Lazy::new(|| {
    vec![
        (
            "titanic",
            vec![CuratedEntry {
                name: "Titanic - Machine Learning from Disaster",
                description: "The classic Titanic dataset for machine learning beginners",
                url: "https://www.kaggle.com/c/titanic",
            }],
        ),
        (
            "covid",
            vec![CuratedEntry {
                name: "COVID-19 Dataset",
                description: "Comprehensive COVID-19 data for analysis",
                url: "https://www.kaggle.com/datasets/sudalairajkumar/novel-corona-virus-2019-dataset",
            }],
        ),
        (
            "image",
            vec![CuratedEntry {
                name: "Image Classification Datasets",
                description: "Various image datasets for computer vision projects",
                url: "https://www.kaggle.com/datasets?search=image+classification",
            }],
        ),
    ]
});

/// Kaggle curated-table adapter
pub struct DataPlatformAdapter;

impl DataPlatformAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Deep link to the platform's own search page for a query
    fn search_page_url(query: &str) -> String {
        format!(
            "https://www.kaggle.com/datasets?search={}",
            urlencoding::encode(query)
        )
    }

    /// Generic fallback item for queries outside the curated table
    fn fallback_item(query: &str) -> Item {
        Item::new(
            format!("Kaggle Datasets: {}", query),
            format!(
                "Search Kaggle for {} datasets, notebooks, and competitions",
                query
            ),
            Source::DataPlatform,
            Self::search_page_url(query),
        )
        .with_tags(vec![
            "Kaggle".to_string(),
            "Dataset".to_string(),
            "Competition".to_string(),
        ])
    }
}

impl Default for DataPlatformAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SourceAdapter for DataPlatformAdapter {
    fn name(&self) -> &str {
        "data_platform"
    }

    fn source(&self) -> Source {
        Source::DataPlatform
    }

    async fn search(&self, _client: &HttpClient, query: &str) -> Vec<Item> {
        let query_lower = query.to_lowercase();

        // Case-insensitive substring match, first table entry wins
        if let Some((keyword, entries)) = CURATED
            .iter()
            .find(|(keyword, _)| query_lower.contains(keyword))
        {
            debug!("Kaggle curated table matched keyword '{}'", keyword);
            return entries
                .iter()
                .map(|entry| {
                    Item::new(entry.name, entry.description, Source::DataPlatform, entry.url)
                        .with_tags(vec![
                            "Dataset".to_string(),
                            "Kaggle".to_string(),
                            "Data Science".to_string(),
                        ])
                })
                .collect();
        }

        vec![Self::fallback_item(query)]
    }
}
