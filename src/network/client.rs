//! HTTP client for making requests to remote search APIs

use crate::config::OutgoingSettings;
use anyhow::Result;
use reqwest::{Client, Response};
use std::collections::HashMap;
use std::time::Duration;

/// Accept header for the JSON APIs queried here
pub const ACCEPT_JSON: &str = "application/json";

/// A GET request against one remote search endpoint.
///
/// All three live endpoints are plain query-parameter GETs, so the envelope
/// stays deliberately small.
#[derive(Debug, Clone)]
pub struct SourceRequest {
    /// URL to request
    pub url: String,
    /// Query parameters
    pub params: HashMap<String, String>,
    /// Request headers
    pub headers: HashMap<String, String>,
}

impl SourceRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            params: HashMap::new(),
            headers: HashMap::new(),
        }
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// HTTP response from a source request
#[derive(Debug)]
pub struct SourceResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
}

impl SourceResponse {
    /// Parse response body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.text)?)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client wrapper with aggregator-specific configuration
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .pool_max_idle_per_host(settings.pool_maxsize)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            // The APIs here are official JSON endpoints; a plain product
            // identifier is expected (GitHub rejects requests without one).
            user_agent: format!("devscout-rs/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    /// Execute a source request
    pub async fn execute(&self, request: SourceRequest) -> Result<SourceResponse> {
        let mut req_builder = self
            .client
            .get(&request.url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", ACCEPT_JSON);

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.params.is_empty() {
            req_builder = req_builder.query(&request.params);
        }

        let response = req_builder.send().await?;
        Self::parse_response(response).await
    }

    /// Parse response into SourceResponse
    async fn parse_response(response: Response) -> Result<SourceResponse> {
        let status = response.status().as_u16();
        let text = response.text().await?;

        Ok(SourceResponse { status, text })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new().expect("Failed to create default HTTP client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_request_builder() {
        let request = SourceRequest::get("https://api.github.com/search/repositories")
            .param("q", "rust")
            .header("Accept", "application/vnd.github.v3+json");

        assert_eq!(request.params.get("q").map(String::as_str), Some("rust"));
        assert!(request.headers.contains_key("Accept"));
    }

    #[test]
    fn test_response_success_range() {
        let response = SourceResponse {
            status: 204,
            text: String::new(),
        };
        assert!(response.is_success());

        let forbidden = SourceResponse {
            status: 403,
            text: String::new(),
        };
        assert!(!forbidden.is_success());
    }
}
