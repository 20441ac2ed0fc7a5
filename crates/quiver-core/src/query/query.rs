//! Query over a feature group selection, with joins and filters

use crate::catalog::FeatureGroup;
use crate::query::filter::Filter;
use crate::query::logic::{FilterExpr, Logic};
use serde::{Deserialize, Serialize};

/// Join kinds supported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
}

/// A joined sub-query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Join {
    pub query: Query,
    /// Join keys named identically on both sides
    #[serde(default)]
    pub on: Vec<String>,
    /// Left-side join keys, paired with `right_on`
    #[serde(default)]
    pub left_on: Vec<String>,
    /// Right-side join keys, paired with `left_on`
    #[serde(default)]
    pub right_on: Vec<String>,
    pub join_type: JoinType,
}

/// A query over one feature group, with optional joins and filters
///
/// Built fluently from a [`FeatureGroup`] selection; consumed once by
/// the read path and discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub feature_group: FeatureGroup,
    /// Selected column names, in selection order
    pub features: Vec<String>,
    #[serde(default)]
    pub joins: Vec<Join>,
    #[serde(default)]
    pub filter: Option<Logic>,
}

impl Query {
    pub fn new(feature_group: FeatureGroup, features: Vec<String>) -> Self {
        Self {
            feature_group,
            features,
            joins: Vec::new(),
            filter: None,
        }
    }

    /// Add a predicate, left-folding into a growing `AND` tree.
    ///
    /// A lone predicate is wrapped in a `SINGLE` node. Conjoining onto
    /// that wrapper replaces it with a plain `AND` of the inner predicate
    /// and the new one, so N chained calls produce N-1 connectives.
    pub fn filter(mut self, expr: impl Into<FilterExpr>) -> Self {
        let expr = expr.into();
        self.filter = Some(match self.filter.take() {
            None => match expr {
                FilterExpr::Filter(filter) => Logic::single(filter),
                FilterExpr::Logic(logic) => logic,
            },
            Some(prev) => {
                let left = if prev.is_single_wrapper() {
                    *prev.left
                } else {
                    FilterExpr::Logic(prev)
                };
                Logic::and(left, expr)
            }
        });
        self
    }

    /// Inner-join another query on identically named keys.
    pub fn join(self, other: Query, on: &[&str]) -> Self {
        self.join_with(other, on, &[], &[], JoinType::Inner)
    }

    /// Join another query with explicit keys and join kind.
    pub fn join_with(
        mut self,
        other: Query,
        on: &[&str],
        left_on: &[&str],
        right_on: &[&str],
        join_type: JoinType,
    ) -> Self {
        self.joins.push(Join {
            query: other,
            on: on.iter().map(|s| s.to_string()).collect(),
            left_on: left_on.iter().map(|s| s.to_string()).collect(),
            right_on: right_on.iter().map(|s| s.to_string()).collect(),
            join_type,
        });
        self
    }

    /// The query's own filter AND-folded with each join's filter, in
    /// join order. `None` when nothing is filtered anywhere.
    pub fn combined_filter(&self) -> Option<Logic> {
        let mut combined = self.filter.clone();
        for join in &self.joins {
            if let Some(join_filter) = join.query.combined_filter() {
                combined = Some(match combined {
                    None => join_filter,
                    Some(prev) => {
                        Logic::and(FilterExpr::Logic(prev), FilterExpr::Logic(join_filter))
                    }
                });
            }
        }
        combined
    }

    /// Every feature group referenced by the selection, root first,
    /// joined queries depth-first.
    pub fn feature_groups(&self) -> Vec<&FeatureGroup> {
        let mut groups = vec![&self.feature_group];
        for join in &self.joins {
            groups.extend(join.query.feature_groups());
        }
        groups
    }

    /// `(group, column)` pairs of the full selection, depth-first.
    pub fn selected_features(&self) -> Vec<(&FeatureGroup, &str)> {
        let mut selected: Vec<(&FeatureGroup, &str)> = self
            .features
            .iter()
            .map(|name| (&self.feature_group, name.as_str()))
            .collect();
        for join in &self.joins {
            selected.extend(join.query.selected_features());
        }
        selected
    }

    /// Comparison leaves of the combined filter tree.
    pub fn filter_leaves(&self) -> Vec<Filter> {
        fn collect(expr: &FilterExpr, leaves: &mut Vec<Filter>) {
            match expr {
                FilterExpr::Filter(filter) => leaves.push(filter.clone()),
                FilterExpr::Logic(logic) => {
                    collect(&logic.left, leaves);
                    if let Some(right) = &logic.right {
                        collect(right, leaves);
                    }
                }
            }
        }

        let mut leaves = Vec::new();
        if let Some(logic) = self.combined_filter() {
            collect(&FilterExpr::Logic(logic), &mut leaves);
        }
        leaves
    }
}
