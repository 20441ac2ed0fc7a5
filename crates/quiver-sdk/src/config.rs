//! Client configuration

use crate::error::{Result, SdkError};
use quiver_engine::FlightConfig;
use quiver_repository::ApiConfig;
use serde::{Deserialize, Serialize};

/// Top-level client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Metadata API settings
    pub api: ApiConfig,

    /// Transfer service settings
    #[serde(default)]
    pub flight: FlightConfig,
}

impl ClientConfig {
    pub fn new(api: ApiConfig) -> Self {
        Self {
            api,
            flight: FlightConfig::default(),
        }
    }

    /// Parse a configuration from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| SdkError::Config(format!("Failed to parse config: {}", e)))
    }
}
