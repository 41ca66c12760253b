//! Settings structures for DevScout-RS configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub search: SearchSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (DEVSCOUT_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("DEVSCOUT_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("DEVSCOUT_REQUEST_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.outgoing.request_timeout = timeout;
            }
        }
        if let Ok(val) = std::env::var("DEVSCOUT_MAX_RESULTS") {
            if let Ok(max) = val.parse() {
                self.search.max_results = max;
            }
        }
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug mode
    pub debug: bool,
    /// Instance name displayed by consumers
    pub instance_name: String,
}

impl GeneralSettings {
    /// Default log filter directive for this debug level
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "DevScout".to_string(),
        }
    }
}

/// Search behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Overall cap on merged items
    pub max_results: usize,
    /// Per-request cap for the code-host source
    pub code_host_limit: usize,
    /// Per-request cap for the model-hub model search
    pub model_limit: usize,
    /// Per-request cap for the model-hub dataset search
    pub dataset_limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_results: crate::MAX_RESULTS,
            code_host_limit: 6,
            model_limit: 4,
            dataset_limit: 2,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Max idle connections per host
    pub pool_maxsize: usize,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 10.0,
            pool_maxsize: 10,
        }
    }
}
