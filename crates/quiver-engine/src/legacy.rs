//! Legacy distributed SQL engine connector

use crate::error::Result;
use crate::table::Table;
use async_trait::async_trait;

/// Connector to the legacy distributed SQL engine
///
/// One connection is opened per read; the dispatcher performs no
/// pooling or retries of its own.
#[async_trait]
pub trait LegacyEngineConnector: Send + Sync {
    /// Open a connection to the engine.
    async fn connect(&self) -> Result<Box<dyn LegacyConnection>>;
}

/// An open connection to the legacy engine
#[async_trait]
pub trait LegacyConnection: Send + Sync {
    /// Execute a SQL string and return the resulting table.
    async fn execute(&self, query_string: &str) -> Result<Table>;
}

#[cfg(feature = "sqlx")]
pub use postgres::PostgresConnector;

#[cfg(feature = "sqlx")]
mod postgres {
    use super::*;
    use crate::error::EngineError;
    use quiver_core::Value;
    use sqlx::{Column, Row};
    use std::collections::HashMap;

    /// Postgres-backed legacy engine connector
    pub struct PostgresConnector {
        connection_string: String,
        pool_size: u32,
    }

    impl PostgresConnector {
        pub fn new(connection_string: impl Into<String>, pool_size: u32) -> Self {
            Self {
                connection_string: connection_string.into(),
                pool_size,
            }
        }
    }

    #[async_trait]
    impl LegacyEngineConnector for PostgresConnector {
        async fn connect(&self) -> Result<Box<dyn LegacyConnection>> {
            use sqlx::postgres::PgPoolOptions;

            tracing::info!("Connecting to legacy engine");
            let pool = PgPoolOptions::new()
                .max_connections(self.pool_size.max(1))
                .connect(&self.connection_string)
                .await
                .map_err(|e| {
                    EngineError::LegacyEngine(format!("Failed to connect: {}", e))
                })?;

            Ok(Box::new(PostgresConnection { pool }))
        }
    }

    struct PostgresConnection {
        pool: sqlx::PgPool,
    }

    #[async_trait]
    impl LegacyConnection for PostgresConnection {
        async fn execute(&self, query_string: &str) -> Result<Table> {
            tracing::debug!("Executing legacy engine query: {}", query_string);

            let rows = sqlx::query(query_string)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    EngineError::LegacyEngine(format!("Failed to execute query: {}", e))
                })?;

            let mut columns: Vec<String> = Vec::new();
            let mut result_rows = Vec::new();

            for row in rows {
                let mut map = HashMap::new();
                for (idx, column) in row.columns().iter().enumerate() {
                    let name = column.name().to_string();
                    if !columns.contains(&name) {
                        columns.push(name.clone());
                    }

                    // Try column types in order of likelihood
                    let value = if let Ok(v) = row.try_get::<Option<i64>, _>(idx) {
                        v.map(Value::Int).unwrap_or(Value::Null)
                    } else if let Ok(v) = row.try_get::<Option<i32>, _>(idx) {
                        v.map(|n| Value::Int(n as i64)).unwrap_or(Value::Null)
                    } else if let Ok(v) = row.try_get::<Option<f64>, _>(idx) {
                        v.map(Value::Float).unwrap_or(Value::Null)
                    } else if let Ok(v) = row.try_get::<Option<bool>, _>(idx) {
                        v.map(Value::Bool).unwrap_or(Value::Null)
                    } else if let Ok(v) = row.try_get::<Option<String>, _>(idx) {
                        v.map(Value::String).unwrap_or(Value::Null)
                    } else {
                        tracing::warn!("Failed to extract value for column {}", name);
                        Value::Null
                    };

                    map.insert(name, value);
                }
                result_rows.push(map);
            }

            Ok(Table::new(columns, result_rows))
        }
    }
}
