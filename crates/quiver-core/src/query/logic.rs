//! Logical connectives over filter predicates

use crate::query::filter::Filter;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Connective kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogicType {
    And,
    Or,
    /// Degenerate wrapper around a lone predicate that has not been
    /// conjoined with anything yet
    Single,
}

impl fmt::Display for LogicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogicType::And => "AND",
            LogicType::Or => "OR",
            LogicType::Single => "SINGLE",
        })
    }
}

/// Internal node of a filter expression tree
///
/// The right child is absent only for `SINGLE` nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logic {
    pub logic_type: LogicType,
    pub left: Box<FilterExpr>,
    #[serde(default)]
    pub right: Option<Box<FilterExpr>>,
}

impl Logic {
    /// Wrap a lone predicate.
    pub fn single(filter: Filter) -> Self {
        Self {
            logic_type: LogicType::Single,
            left: Box::new(FilterExpr::Filter(filter)),
            right: None,
        }
    }

    /// Conjoin two subtrees.
    pub fn and(left: FilterExpr, right: FilterExpr) -> Self {
        Self {
            logic_type: LogicType::And,
            left: Box::new(left),
            right: Some(Box::new(right)),
        }
    }

    /// Disjoin two subtrees.
    pub fn or(left: FilterExpr, right: FilterExpr) -> Self {
        Self {
            logic_type: LogicType::Or,
            left: Box::new(left),
            right: Some(Box::new(right)),
        }
    }

    /// True for a bare `SINGLE` wrapper around one predicate.
    pub fn is_single_wrapper(&self) -> bool {
        self.logic_type == LogicType::Single && self.right.is_none()
    }
}

/// A filter expression tree node: either a comparison leaf or a
/// logical connective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterExpr {
    Filter(Filter),
    Logic(Logic),
}

impl FilterExpr {
    /// Conjunction with another predicate or tree.
    pub fn and(self, other: impl Into<FilterExpr>) -> Logic {
        Logic::and(self, other.into())
    }

    /// Disjunction with another predicate or tree.
    pub fn or(self, other: impl Into<FilterExpr>) -> Logic {
        Logic::or(self, other.into())
    }
}

impl From<Filter> for FilterExpr {
    fn from(filter: Filter) -> Self {
        FilterExpr::Filter(filter)
    }
}

impl From<Logic> for FilterExpr {
    fn from(logic: Logic) -> Self {
        FilterExpr::Logic(logic)
    }
}
