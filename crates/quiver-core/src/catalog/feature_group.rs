//! Feature group descriptor and selection entry points

use crate::catalog::Feature;
use crate::error::{CoreError, Result};
use crate::query::{FeatureRef, FilterExpr, Query};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named, versioned table of features in the feature store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureGroup {
    pub id: i32,
    pub name: String,
    pub version: i32,
    pub featurestore_name: String,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub online_enabled: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

impl FeatureGroup {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        version: i32,
        featurestore_name: impl Into<String>,
        features: Vec<Feature>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            version,
            featurestore_name: featurestore_name.into(),
            features,
            online_enabled: false,
            description: None,
            created: None,
        }
    }

    /// Fully qualified table name as the backend knows it,
    /// `featurestore.name_version`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}_{}", self.featurestore_name, self.name, self.version)
    }

    /// Reference to one of this group's features, for building filters.
    pub fn feature(&self, name: &str) -> Result<FeatureRef> {
        self.features
            .iter()
            .find(|f| f.name == name)
            .map(|f| FeatureRef::new(self.id, self.qualified_name(), f.name.clone()))
            .ok_or_else(|| {
                CoreError::FeatureNotFound(format!("{}.{}", self.qualified_name(), name))
            })
    }

    /// Query selecting every feature of this group.
    pub fn select_all(&self) -> Query {
        Query::new(
            self.clone(),
            self.features.iter().map(|f| f.name.clone()).collect(),
        )
    }

    /// Query selecting a subset of this group's features.
    pub fn select(&self, names: &[&str]) -> Result<Query> {
        for name in names {
            if !self.features.iter().any(|f| f.name == *name) {
                return Err(CoreError::InvalidSelection(format!(
                    "{} has no feature named {}",
                    self.qualified_name(),
                    name
                )));
            }
        }
        Ok(Query::new(
            self.clone(),
            names.iter().map(|s| s.to_string()).collect(),
        ))
    }

    /// Shorthand for `select_all().filter(expr)`.
    pub fn filter(&self, expr: impl Into<FilterExpr>) -> Query {
        self.select_all().filter(expr)
    }
}
