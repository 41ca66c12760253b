//! Configuration module for DevScout-RS
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use once_cell::sync::OnceCell;

/// Global settings instance
static SETTINGS: OnceCell<Settings> = OnceCell::new();

/// Install the global settings instance, once per process
pub fn init(settings: Settings) -> Result<()> {
    SETTINGS
        .set(settings)
        .map_err(|_| anyhow::anyhow!("Settings already initialized"))?;
    Ok(())
}

/// Get a reference to the global settings
pub fn get() -> &'static Settings {
    SETTINGS.get().expect("Settings not initialized")
}

/// Check if settings have been initialized
pub fn is_initialized() -> bool {
    SETTINGS.get().is_some()
}
