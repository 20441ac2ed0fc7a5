//! Feature descriptor

use serde::{Deserialize, Serialize};

/// A single named column of a feature group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub name: String,
    /// Backend type name, e.g. `int`, `double`, `string`
    #[serde(rename = "type")]
    pub data_type: String,
    /// Part of the primary key
    #[serde(default)]
    pub primary: bool,
}

impl Feature {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            primary: false,
        }
    }
}
