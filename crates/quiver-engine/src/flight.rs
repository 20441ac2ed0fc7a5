//! Columnar transfer service client

use crate::error::Result;
use crate::query_object::QueryObject;
use crate::table::Table;
use async_trait::async_trait;
use quiver_core::query::Query;
use serde::{Deserialize, Serialize};

/// Transport to the columnar transfer service
///
/// The wire protocol is supplied by the caller; this crate only shapes
/// payloads and routes reads. Failures propagate to the caller unchanged.
#[async_trait]
pub trait ColumnarTransport: Send + Sync {
    /// Execute a serialized query and return its result table.
    async fn read_query(&self, query: &QueryObject) -> Result<Table>;

    /// Read a materialized dataset file.
    async fn read_path(&self, path: &str) -> Result<Table>;
}

/// Transfer service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightConfig {
    /// Whether the transfer service read path is available
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Service host
    #[serde(default = "default_host")]
    pub host: String,

    /// Service port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            host: default_host(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5005
}

fn default_timeout_secs() -> u64 {
    30
}

/// Client for the transfer service read path
pub struct FlightReader {
    config: FlightConfig,
    transport: Box<dyn ColumnarTransport>,
}

impl FlightReader {
    pub fn new(config: FlightConfig, transport: Box<dyn ColumnarTransport>) -> Self {
        tracing::info!(
            "Initializing transfer service client: {}:{}",
            config.host,
            config.port
        );
        Self { config, transport }
    }

    /// Whether the transfer service path is available.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Serialize `query` into a query object and read it through the
    /// transfer service.
    pub async fn read_query(&self, query: &Query, query_string: &str) -> Result<Table> {
        let payload = QueryObject::from_query(query, query_string)?;
        tracing::debug!(
            "Reading query over {} feature group(s) through transfer service",
            payload.featuregroups.len()
        );
        self.transport.read_query(&payload).await
    }

    /// Read a materialized dataset file through the transfer service.
    pub async fn read_path(&self, path: &str) -> Result<Table> {
        tracing::debug!("Reading dataset file through transfer service: {}", path);
        self.transport.read_path(path).await
    }
}
