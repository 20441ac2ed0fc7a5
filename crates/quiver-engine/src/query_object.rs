//! Query-object construction for the columnar transfer service
//!
//! Translates a query's filter expression tree plus its selection into
//! the nested payload the transfer service consumes. The walk is
//! depth-first, left child before right; the tree shape was fixed during
//! query construction and is never rebalanced here.

use quiver_core::query::{Condition, Filter, FilterExpr, Logic, LogicType, Query};
use quiver_core::Value;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::{EngineError, Result};

/// Serialized filter-tree node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FilterNode {
    /// Comparison leaf
    Filter {
        condition: Condition,
        value: Value,
        feature: String,
        numeric: bool,
    },
    /// Logical connective; `right_filter` is null for SINGLE nodes
    Logic {
        logic_type: LogicType,
        left_filter: Box<FilterNode>,
        right_filter: Option<Box<FilterNode>>,
    },
}

impl FilterNode {
    /// Number of comparison leaves under this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            FilterNode::Filter { .. } => 1,
            FilterNode::Logic {
                left_filter,
                right_filter,
                ..
            } => {
                left_filter.leaf_count()
                    + right_filter.as_ref().map_or(0, |node| node.leaf_count())
            }
        }
    }

    /// Number of logical connectives under this node, itself included.
    pub fn connective_count(&self) -> usize {
        match self {
            FilterNode::Filter { .. } => 0,
            FilterNode::Logic {
                left_filter,
                right_filter,
                ..
            } => {
                1 + left_filter.connective_count()
                    + right_filter
                        .as_ref()
                        .map_or(0, |node| node.connective_count())
            }
        }
    }
}

/// Payload sent to the transfer service for query reads
///
/// `featuregroups` maps feature group ids to qualified table names;
/// `features` maps qualified table names to the referenced column names
/// in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryObject {
    pub query_string: String,
    pub featuregroups: BTreeMap<i32, String>,
    pub features: BTreeMap<String, Vec<String>>,
    pub filters: Option<FilterNode>,
}

impl QueryObject {
    /// Build the payload for `query` with its backend-generated SQL string.
    ///
    /// Pure function of its inputs. Fails on a malformed filter tree
    /// (a SINGLE node with a right operand, a binary connective without
    /// one) or on a comparison whose feature reference carries no table
    /// qualifier.
    pub fn from_query(query: &Query, query_string: &str) -> Result<Self> {
        let mut featuregroups = BTreeMap::new();
        let mut features = BTreeMap::new();

        for (group, name) in query.selected_features() {
            record_feature(
                &mut featuregroups,
                &mut features,
                group.id,
                &group.qualified_name(),
                name,
            );
        }

        let filters = match query.combined_filter() {
            Some(logic) => Some(serialize_logic(&logic, &mut featuregroups, &mut features)?),
            None => None,
        };

        Ok(Self {
            query_string: query_string.to_string(),
            featuregroups,
            features,
            filters,
        })
    }
}

fn record_feature(
    featuregroups: &mut BTreeMap<i32, String>,
    features: &mut BTreeMap<String, Vec<String>>,
    group_id: i32,
    table: &str,
    name: &str,
) {
    featuregroups
        .entry(group_id)
        .or_insert_with(|| table.to_string());
    let columns: &mut Vec<String> = features.entry(table.to_string()).or_default();
    if !columns.iter().any(|column| column == name) {
        columns.push(name.to_string());
    }
}

fn serialize_expr(
    expr: &FilterExpr,
    featuregroups: &mut BTreeMap<i32, String>,
    features: &mut BTreeMap<String, Vec<String>>,
) -> Result<FilterNode> {
    match expr {
        FilterExpr::Filter(filter) => serialize_filter(filter, featuregroups, features),
        FilterExpr::Logic(logic) => serialize_logic(logic, featuregroups, features),
    }
}

fn serialize_logic(
    logic: &Logic,
    featuregroups: &mut BTreeMap<i32, String>,
    features: &mut BTreeMap<String, Vec<String>>,
) -> Result<FilterNode> {
    match logic.logic_type {
        LogicType::Single => {
            if logic.right.is_some() {
                return Err(EngineError::InvalidQuery(
                    "SINGLE connective must not have a right operand".to_string(),
                ));
            }
        }
        LogicType::And | LogicType::Or => {
            if logic.right.is_none() {
                return Err(EngineError::InvalidQuery(format!(
                    "{} connective requires a right operand",
                    logic.logic_type
                )));
            }
        }
    }

    let left = serialize_expr(&logic.left, featuregroups, features)?;
    let right = match logic.right.as_deref() {
        Some(expr) => Some(Box::new(serialize_expr(expr, featuregroups, features)?)),
        None => None,
    };

    Ok(FilterNode::Logic {
        logic_type: logic.logic_type,
        left_filter: Box::new(left),
        right_filter: right,
    })
}

fn serialize_filter(
    filter: &Filter,
    featuregroups: &mut BTreeMap<i32, String>,
    features: &mut BTreeMap<String, Vec<String>>,
) -> Result<FilterNode> {
    if filter.feature.table.is_empty() {
        return Err(EngineError::InvalidQuery(format!(
            "feature '{}' is not bound to a feature group",
            filter.feature.name
        )));
    }

    record_feature(
        featuregroups,
        features,
        filter.feature.feature_group_id,
        &filter.feature.table,
        &filter.feature.name,
    );

    Ok(FilterNode::Filter {
        condition: filter.condition,
        value: filter.value.clone(),
        feature: filter.feature.qualified_name(),
        numeric: filter.value.is_numeric(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiver_core::catalog::{Feature, FeatureGroup};
    use quiver_core::query::FeatureRef;

    fn feature_group() -> FeatureGroup {
        FeatureGroup::new(
            15,
            "fg_test",
            1,
            "test",
            vec![Feature::new("intt", "int"), Feature::new("stringt", "string")],
        )
    }

    #[test]
    fn test_no_filters_serializes_null() {
        let fg = feature_group();
        let object = QueryObject::from_query(&fg.select_all(), "SELECT 1").unwrap();

        assert!(object.filters.is_none());
        assert_eq!(object.featuregroups[&15], "test.fg_test_1");
        assert_eq!(
            object.features["test.fg_test_1"],
            vec!["intt".to_string(), "stringt".to_string()]
        );

        let json = serde_json::to_value(&object).unwrap();
        assert!(json["filters"].is_null());
    }

    #[test]
    fn test_single_predicate_wraps_in_single() {
        let fg = feature_group();
        let query = fg.filter(fg.feature("intt").unwrap().gt(500));
        let object = QueryObject::from_query(&query, "SELECT 1").unwrap();

        let json = serde_json::to_value(object.filters.unwrap()).unwrap();
        assert_eq!(json["type"], "logic");
        assert_eq!(json["logic_type"], "SINGLE");
        assert_eq!(json["left_filter"]["type"], "filter");
        assert!(json["right_filter"].is_null());
    }

    #[test]
    fn test_comparison_node_shape() {
        let fg = feature_group();
        let query = fg.filter(fg.feature("intt").unwrap().gt(500));
        let object = QueryObject::from_query(&query, "SELECT 1").unwrap();

        let json = serde_json::to_value(object.filters.unwrap()).unwrap();
        let leaf = &json["left_filter"];
        assert_eq!(leaf["condition"], "GREATER_THAN");
        assert_eq!(leaf["value"], 500);
        assert_eq!(leaf["feature"], "test.fg_test_1.intt");
        assert_eq!(leaf["numeric"], true);
    }

    #[test]
    fn test_numeric_flag_follows_literal_type() {
        let fg = feature_group();
        let intt = fg.feature("intt").unwrap();
        let stringt = fg.feature("stringt").unwrap();

        let query = fg
            .filter(intt.gt(500))
            .filter(intt.lt(0.1))
            .filter(stringt.eq("abc"))
            .filter(stringt.eq(true));
        let object = QueryObject::from_query(&query, "SELECT 1").unwrap();

        fn leaves(node: &FilterNode, out: &mut Vec<(Value, bool)>) {
            match node {
                FilterNode::Filter { value, numeric, .. } => {
                    out.push((value.clone(), *numeric))
                }
                FilterNode::Logic {
                    left_filter,
                    right_filter,
                    ..
                } => {
                    leaves(left_filter, out);
                    if let Some(right) = right_filter {
                        leaves(right, out);
                    }
                }
            }
        }

        let mut collected = Vec::new();
        leaves(&object.filters.unwrap(), &mut collected);
        assert_eq!(
            collected,
            vec![
                (Value::Int(500), true),
                (Value::Float(0.1), true),
                (Value::String("abc".to_string()), false),
                (Value::Bool(true), false),
            ]
        );
    }

    #[test]
    fn test_filter_only_feature_lands_in_features_map() {
        let fg = feature_group();
        let query = fg
            .select(&["intt"])
            .unwrap()
            .filter(fg.feature("stringt").unwrap().eq("abc"));
        let object = QueryObject::from_query(&query, "SELECT 1").unwrap();

        // stringt is filtered but not selected; it must still be covered
        assert_eq!(
            object.features["test.fg_test_1"],
            vec!["intt".to_string(), "stringt".to_string()]
        );
        assert_eq!(object.featuregroups[&15], "test.fg_test_1");
    }

    #[test]
    fn test_single_with_right_operand_fails() {
        let fg = feature_group();
        let intt = fg.feature("intt").unwrap();

        let malformed = Logic {
            logic_type: LogicType::Single,
            left: Box::new(FilterExpr::Filter(intt.gt(500))),
            right: Some(Box::new(FilterExpr::Filter(intt.lt(700)))),
        };
        let mut query = fg.select_all();
        query.filter = Some(malformed);

        let err = QueryObject::from_query(&query, "SELECT 1").unwrap_err();
        assert!(matches!(err, EngineError::InvalidQuery(_)));
    }

    #[test]
    fn test_binary_connective_without_right_operand_fails() {
        let fg = feature_group();
        let malformed = Logic {
            logic_type: LogicType::And,
            left: Box::new(FilterExpr::Filter(fg.feature("intt").unwrap().gt(500))),
            right: None,
        };
        let mut query = fg.select_all();
        query.filter = Some(malformed);

        let err = QueryObject::from_query(&query, "SELECT 1").unwrap_err();
        match err {
            EngineError::InvalidQuery(message) => assert!(message.contains("AND")),
            other => panic!("Expected InvalidQuery, got {:?}", other),
        }
    }

    #[test]
    fn test_unbound_feature_fails() {
        let fg = feature_group();
        let unbound = FeatureRef::new(0, "", "orphan");
        let query = fg.filter(unbound.gt(1));

        let err = QueryObject::from_query(&query, "SELECT 1").unwrap_err();
        match err {
            EngineError::InvalidQuery(message) => assert!(message.contains("orphan")),
            other => panic!("Expected InvalidQuery, got {:?}", other),
        }
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let fg = feature_group();
        let intt = fg.feature("intt").unwrap();
        let query = fg
            .filter(intt.gt(500).and(fg.feature("stringt").unwrap().eq("abc")))
            .filter(intt.lt(700));

        let first = QueryObject::from_query(&query, "SELECT 1").unwrap();
        let second = QueryObject::from_query(&query, "SELECT 1").unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
