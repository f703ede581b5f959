use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use isosvg_core::RenderDefaults;

use crate::ServerError;

/// Server settings, read from an optional JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Address the HTTP listener binds to.
    pub bind: String,
    /// Request path that serves surface plots.
    pub route: String,
    /// Fallbacks for missing or malformed query parameters.
    pub defaults: RenderDefaults,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
            route: "/surface".to_string(),
            defaults: RenderDefaults::default(),
        }
    }
}

impl ServerSettings {
    pub fn from_json(json: &str) -> Result<Self, ServerError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.defaults.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, ServerError> {
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
