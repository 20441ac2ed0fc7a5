//! Response models specific to the metadata API

use serde::{Deserialize, Serialize};

/// Backend-generated SQL for a client-built query
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructedQuery {
    /// SQL string for the submitted query
    pub query: String,

    /// Optional point-in-time variant of the same query
    #[serde(default)]
    pub pit_query: Option<String>,
}

/// A single data file of a materialized training dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetFile {
    pub path: String,
}

/// Listing of dataset files under a path
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileListing {
    pub count: i64,

    #[serde(default)]
    pub files: Vec<DatasetFile>,
}
