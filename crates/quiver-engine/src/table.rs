//! Tabular read results

use quiver_core::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Result of a read: named columns and rows of values
///
/// Reads either return a complete table or fail entirely; there are no
/// partial results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Column names in result order
    #[serde(default)]
    pub columns: Vec<String>,
    /// Result rows
    #[serde(default)]
    pub rows: Vec<HashMap<String, Value>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<HashMap<String, Value>>) -> Self {
        Self { columns, rows }
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
