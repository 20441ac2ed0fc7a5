//! Fluent query construction
//!
//! Queries are built by selecting features from a feature group, then
//! chaining `filter` and `join` calls. The resulting filter expression
//! tree is consumed by the read path when the query is serialized for
//! the transfer service.

pub mod filter;
pub mod logic;
#[allow(clippy::module_inception)]
pub mod query;

pub use filter::{Condition, FeatureRef, Filter};
pub use logic::{FilterExpr, Logic, LogicType};
pub use query::{Join, JoinType, Query};
