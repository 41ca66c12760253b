//! Code-host (GitHub) repository search adapter
//!
//! Uses GitHub's official repository search API, unauthenticated.
//! Unauthenticated clients get 60 requests/hour per IP; hitting that limit
//! answers 403 and is treated as an expected degradation, not an error.

use super::traits::{str_array_field, str_field, SourceAdapter};
use crate::network::{HttpClient, SourceRequest};
use crate::results::{Item, Source};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

const DEFAULT_API_URL: &str = "https://api.github.com/search/repositories";

/// GitHub repository search adapter
pub struct CodeHostAdapter {
    api_url: String,
    per_page: usize,
}

impl CodeHostAdapter {
    pub fn new() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            per_page: 6,
        }
    }

    /// Override the endpoint URL (used by tests to point at a mock server)
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    /// Map one raw repository record to an item. Records without a link
    /// or a name are skipped.
    fn map_repo(&self, repo: &Value, query: &str) -> Option<Item> {
        let url = str_field(repo, "html_url")?;
        let name = str_field(repo, "name")?;

        let description = str_field(repo, "description")
            .map(str::to_string)
            .unwrap_or_else(|| format!("A {} project on GitHub", query));

        let mut tags = str_array_field(repo, "topics");
        tags.push("Open Source".to_string());
        tags.push("GitHub".to_string());

        let mut item = Item::new(name, description, Source::CodeHost, url).with_tags(tags);
        if let Some(stars) = repo.get("stargazers_count").and_then(Value::as_u64) {
            item = item.with_popularity(stars);
        }
        Some(item)
    }
}

impl Default for CodeHostAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SourceAdapter for CodeHostAdapter {
    fn name(&self) -> &str {
        "code_host"
    }

    fn source(&self) -> Source {
        Source::CodeHost
    }

    async fn search(&self, client: &HttpClient, query: &str) -> Vec<Item> {
        let request = SourceRequest::get(&self.api_url)
            .param("q", query)
            .param("sort", "stars")
            .param("order", "desc")
            .param("per_page", self.per_page.to_string())
            .header("Accept", "application/vnd.github.v3+json");

        let response = match client.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("GitHub search request failed: {}", e);
                return Vec::new();
            }
        };

        if response.status == 403 {
            warn!("GitHub API rate limit reached, results may be limited");
            return Vec::new();
        }
        if !response.is_success() {
            warn!("GitHub API error: {}", response.status);
            return Vec::new();
        }

        let json: Value = match response.json() {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to parse GitHub response: {}", e);
                return Vec::new();
            }
        };

        let items: Vec<Item> = json
            .get("items")
            .and_then(Value::as_array)
            .map(|repos| {
                repos
                    .iter()
                    .filter_map(|repo| self.map_repo(repo, query))
                    .collect()
            })
            .unwrap_or_default();

        debug!("GitHub returned {} repositories", items.len());
        items
    }
}
