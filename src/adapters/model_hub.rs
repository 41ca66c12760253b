//! Model-hub (Hugging Face) search adapter
//!
//! Issues two sequential unauthenticated requests: models first, then
//! datasets. The dataset search is best-effort augmentation; when it fails
//! after a successful model search, the model items are kept and the failure
//! is swallowed.

use super::traits::{str_array_field, str_field, SourceAdapter};
use crate::network::{HttpClient, SourceRequest};
use crate::results::{Item, Source};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

const DEFAULT_MODELS_URL: &str = "https://huggingface.co/api/models";
const DEFAULT_DATASETS_URL: &str = "https://huggingface.co/api/datasets";

/// Hugging Face model and dataset search adapter
pub struct ModelHubAdapter {
    models_url: String,
    datasets_url: String,
    model_limit: usize,
    dataset_limit: usize,
}

impl ModelHubAdapter {
    pub fn new() -> Self {
        Self {
            models_url: DEFAULT_MODELS_URL.to_string(),
            datasets_url: DEFAULT_DATASETS_URL.to_string(),
            model_limit: 4,
            dataset_limit: 2,
        }
    }

    /// Override the model endpoint (used by tests)
    pub fn with_models_url(mut self, url: impl Into<String>) -> Self {
        self.models_url = url.into();
        self
    }

    /// Override the dataset endpoint (used by tests)
    pub fn with_datasets_url(mut self, url: impl Into<String>) -> Self {
        self.datasets_url = url.into();
        self
    }

    /// Override the per-request caps
    pub fn with_limits(mut self, model_limit: usize, dataset_limit: usize) -> Self {
        self.model_limit = model_limit;
        self.dataset_limit = dataset_limit;
        self
    }

    fn search_request(&self, url: &str, query: &str, limit: usize) -> SourceRequest {
        SourceRequest::get(url)
            .param("search", query)
            .param("sort", "downloads")
            .param("direction", "-1")
            .param("limit", limit.to_string())
    }

    /// Map one raw model record to an item.
    fn map_model(&self, model: &Value) -> Item {
        let id = str_field(model, "id")
            .or_else(|| str_field(model, "modelId"))
            .unwrap_or("Hugging Face Model");
        let pipeline = str_field(model, "pipeline_tag");
        let author = str_field(model, "author");

        let mut description = match pipeline {
            Some(tag) => format!("A {} model on Hugging Face", tag),
            None => "A machine learning model on Hugging Face".to_string(),
        };
        if let Some(author) = author {
            description.push_str(&format!(" by {}", author));
        }

        let mut tags: Vec<String> = str_array_field(model, "tags").into_iter().take(3).collect();
        tags.push(pipeline.unwrap_or("Model").to_string());
        tags.push("AI/ML".to_string());

        Item::new(
            id,
            description,
            Source::ModelHub,
            format!("https://huggingface.co/{}", id),
        )
        .with_tags(tags)
    }

    /// Map one raw dataset record to an item.
    fn map_dataset(&self, dataset: &Value) -> Item {
        let id = str_field(dataset, "id").unwrap_or("Dataset");
        let description = match str_field(dataset, "author") {
            Some(author) => format!("A dataset on Hugging Face by {}", author),
            None => "A dataset on Hugging Face".to_string(),
        };

        Item::new(
            id,
            description,
            Source::ModelHub,
            format!("https://huggingface.co/datasets/{}", id),
        )
        .with_tags(vec![
            "Dataset".to_string(),
            "Data".to_string(),
            "Hugging Face".to_string(),
        ])
    }

    /// Best-effort dataset augmentation; failures are absorbed.
    async fn search_datasets(&self, client: &HttpClient, query: &str) -> Vec<Item> {
        let request = self.search_request(&self.datasets_url, query, self.dataset_limit);
        let response = match client.execute(request).await {
            Ok(response) if response.is_success() => response,
            Ok(response) => {
                debug!(
                    "Hugging Face dataset search unavailable ({}), continuing without it",
                    response.status
                );
                return Vec::new();
            }
            Err(e) => {
                debug!("Hugging Face dataset search failed: {}", e);
                return Vec::new();
            }
        };

        match response.json::<Vec<Value>>() {
            Ok(datasets) => datasets
                .iter()
                .take(self.dataset_limit)
                .map(|dataset| self.map_dataset(dataset))
                .collect(),
            Err(e) => {
                debug!("Failed to parse Hugging Face dataset response: {}", e);
                Vec::new()
            }
        }
    }
}

impl Default for ModelHubAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SourceAdapter for ModelHubAdapter {
    fn name(&self) -> &str {
        "model_hub"
    }

    fn source(&self) -> Source {
        Source::ModelHub
    }

    async fn search(&self, client: &HttpClient, query: &str) -> Vec<Item> {
        // Model search first; its failure aborts the whole adapter.
        let request = self.search_request(&self.models_url, query, self.model_limit);
        let response = match client.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Hugging Face search request failed: {}", e);
                return Vec::new();
            }
        };

        if !response.is_success() {
            warn!("Hugging Face API error: {}", response.status);
            return Vec::new();
        }

        let models: Vec<Value> = match response.json() {
            Ok(models) => models,
            Err(e) => {
                warn!("Failed to parse Hugging Face model response: {}", e);
                return Vec::new();
            }
        };

        let mut items: Vec<Item> = models
            .iter()
            .take(self.model_limit)
            .map(|model| self.map_model(model))
            .collect();

        items.extend(self.search_datasets(client, query).await);

        debug!("Hugging Face returned {} items", items.len());
        items
    }
}
