//! Read path for the Quiver feature store client
//!
//! This crate shapes client-built queries into the transfer service's
//! query-object payload and dispatches reads to one of two backends:
//! - The columnar transfer service (preferred, when enabled)
//! - The legacy distributed SQL engine (explicit opt-in or fallback)

pub mod error;
pub mod flight;
pub mod legacy;
pub mod query_object;
pub mod read;
pub mod table;

pub use error::{EngineError, Result};
pub use flight::{ColumnarTransport, FlightConfig, FlightReader};
pub use legacy::{LegacyConnection, LegacyEngineConnector};
pub use query_object::{FilterNode, QueryObject};
pub use read::{ReadEngine, ReadOptions};
pub use table::Table;

#[cfg(feature = "sqlx")]
pub use legacy::PostgresConnector;
