//! Read dispatch between the transfer service and the legacy engine

use crate::error::{EngineError, Result};
use crate::flight::FlightReader;
use crate::legacy::LegacyEngineConnector;
use crate::table::Table;
use quiver_core::query::Query;

/// Per-read options
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Route this read through the legacy engine instead of the
    /// transfer service
    pub use_legacy_engine: bool,
}

impl ReadOptions {
    /// Options requesting the legacy engine explicitly.
    pub fn legacy() -> Self {
        Self {
            use_legacy_engine: true,
        }
    }
}

/// Dispatches reads to the transfer service or the legacy engine
///
/// Constructed once and shared by reference; configuration does not
/// change after construction. Backend failures propagate unchanged,
/// and no automatic fallback happens beyond routing to the legacy
/// engine when the transfer service is disabled.
pub struct ReadEngine {
    flight: FlightReader,
    legacy: Option<Box<dyn LegacyEngineConnector>>,
}

impl ReadEngine {
    pub fn new(flight: FlightReader, legacy: Option<Box<dyn LegacyEngineConnector>>) -> Self {
        Self { flight, legacy }
    }

    /// Whether the transfer service path is available.
    pub fn transfer_enabled(&self) -> bool {
        self.flight.is_enabled()
    }

    /// Execute a query on the selected read path.
    pub async fn read_query(
        &self,
        query: &Query,
        query_string: &str,
        options: &ReadOptions,
    ) -> Result<Table> {
        if !options.use_legacy_engine && self.flight.is_enabled() {
            return self.flight.read_query(query, query_string).await;
        }

        if !options.use_legacy_engine {
            tracing::warn!("Transfer service disabled, falling back to legacy engine");
        }
        let connector = self.legacy.as_deref().ok_or_else(|| {
            EngineError::LegacyEngine("no legacy engine connector configured".to_string())
        })?;
        let connection = connector.connect().await?;
        connection.execute(query_string).await
    }

    /// Read a materialized dataset file. Transfer service only; the
    /// legacy path executes SQL strings and cannot serve file reads.
    pub async fn read_path(&self, path: &str) -> Result<Table> {
        if !self.flight.is_enabled() {
            return Err(EngineError::Unsupported(
                "materialized dataset reads require the transfer service".to_string(),
            ));
        }
        self.flight.read_path(path).await
    }
}
