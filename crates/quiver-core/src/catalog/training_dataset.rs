//! Training dataset descriptor

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a training dataset version is served
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainingDatasetType {
    /// Served straight from the view's batch query
    InMemory,
    /// Written out to data files under `location`
    Materialized,
}

/// A created training dataset version of a feature view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingDataset {
    pub id: i32,
    pub version: i32,
    pub dataset_type: TrainingDatasetType,
    #[serde(default = "default_data_format")]
    pub data_format: String,
    /// Dataset root path for materialized versions
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

fn default_data_format() -> String {
    "parquet".to_string()
}
