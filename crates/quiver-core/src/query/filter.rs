//! Comparison predicates over features

use crate::query::logic::{FilterExpr, Logic};
use crate::types::Value;
use serde::{Deserialize, Serialize};

/// Reference to a feature as `(table, column)`, used in filter predicates.
///
/// Obtained from [`FeatureGroup::feature`](crate::catalog::FeatureGroup::feature),
/// which binds the reference to the group's qualified table name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRef {
    /// Id of the owning feature group
    pub feature_group_id: i32,
    /// Qualified table name, e.g. `test.fg_test_1`
    pub table: String,
    /// Column name
    pub name: String,
}

impl FeatureRef {
    pub fn new(
        feature_group_id: i32,
        table: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            feature_group_id,
            table: table.into(),
            name: name.into(),
        }
    }

    /// Fully qualified column name, `table.column`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.table, self.name)
    }

    /// `self > value`
    pub fn gt(&self, value: impl Into<Value>) -> Filter {
        Filter::new(self.clone(), Condition::GreaterThan, value)
    }

    /// `self >= value`
    pub fn ge(&self, value: impl Into<Value>) -> Filter {
        Filter::new(self.clone(), Condition::GreaterThanOrEqual, value)
    }

    /// `self < value`
    pub fn lt(&self, value: impl Into<Value>) -> Filter {
        Filter::new(self.clone(), Condition::LessThan, value)
    }

    /// `self <= value`
    pub fn le(&self, value: impl Into<Value>) -> Filter {
        Filter::new(self.clone(), Condition::LessThanOrEqual, value)
    }

    /// `self == value`
    pub fn eq(&self, value: impl Into<Value>) -> Filter {
        Filter::new(self.clone(), Condition::Equals, value)
    }

    /// `self != value`
    pub fn ne(&self, value: impl Into<Value>) -> Filter {
        Filter::new(self.clone(), Condition::NotEquals, value)
    }

    /// `self IN values`
    pub fn is_in<I, V>(&self, values: I) -> Filter
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        Filter::new(self.clone(), Condition::In, Value::Array(values))
    }

    /// `self LIKE pattern`
    pub fn like(&self, pattern: impl Into<String>) -> Filter {
        Filter::new(self.clone(), Condition::Like, Value::String(pattern.into()))
    }
}

/// Condition kinds understood by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    GreaterThanOrEqual,
    GreaterThan,
    NotEquals,
    Equals,
    LessThanOrEqual,
    LessThan,
    In,
    Like,
}

/// Leaf comparison node of a filter expression tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub feature: FeatureRef,
    pub condition: Condition,
    pub value: Value,
}

impl Filter {
    pub fn new(feature: FeatureRef, condition: Condition, value: impl Into<Value>) -> Self {
        Self {
            feature,
            condition,
            value: value.into(),
        }
    }

    /// Conjunction with another predicate or tree.
    pub fn and(self, other: impl Into<FilterExpr>) -> Logic {
        Logic::and(self.into(), other.into())
    }

    /// Disjunction with another predicate or tree.
    pub fn or(self, other: impl Into<FilterExpr>) -> Logic {
        Logic::or(self.into(), other.into())
    }
}
