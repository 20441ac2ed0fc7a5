//! Feature view descriptor

use crate::query::Query;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named, versioned selection/join of features across feature groups,
/// used to produce training or serving data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureView {
    pub id: i32,
    pub name: String,
    pub version: i32,
    pub featurestore_name: String,
    /// Batch query producing the view's rows
    pub query: Query,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}
