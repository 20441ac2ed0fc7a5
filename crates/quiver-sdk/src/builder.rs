//! Builder pattern for FeatureStoreClient

use crate::client::FeatureStoreClient;
use crate::config::ClientConfig;
use crate::error::{Result, SdkError};
use quiver_engine::{
    ColumnarTransport, FlightConfig, FlightReader, LegacyEngineConnector, ReadEngine,
};
use quiver_repository::{ApiConfig, MetadataRepository, RestRepository};
use std::sync::Arc;

/// Builder for [`FeatureStoreClient`]
///
/// # Example
///
/// ```rust,ignore
/// use quiver_sdk::FeatureStoreClient;
/// use quiver_repository::ApiConfig;
///
/// let client = FeatureStoreClient::builder()
///     .with_api(ApiConfig::new("https://api.example.com/featurestore"))
///     .with_transport(my_transport)
///     .build()?;
/// ```
pub struct FeatureStoreClientBuilder {
    api: Option<ApiConfig>,
    flight: FlightConfig,
    repository: Option<Arc<dyn MetadataRepository>>,
    transport: Option<Box<dyn ColumnarTransport>>,
    legacy: Option<Box<dyn LegacyEngineConnector>>,
}

impl FeatureStoreClientBuilder {
    pub fn new() -> Self {
        Self {
            api: None,
            flight: FlightConfig::default(),
            repository: None,
            transport: None,
            legacy: None,
        }
    }

    /// Apply a full client configuration.
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.api = Some(config.api);
        self.flight = config.flight;
        self
    }

    /// Set the metadata API configuration.
    pub fn with_api(mut self, config: ApiConfig) -> Self {
        self.api = Some(config);
        self
    }

    /// Set the transfer service configuration.
    pub fn with_flight(mut self, config: FlightConfig) -> Self {
        self.flight = config;
        self
    }

    /// Use a pre-built metadata repository instead of the REST one
    /// (for testing or alternative backends).
    pub fn with_repository(mut self, repository: Arc<dyn MetadataRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Set the transport to the columnar transfer service.
    pub fn with_transport(mut self, transport: Box<dyn ColumnarTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set the connector to the legacy SQL engine.
    pub fn with_legacy_connector(mut self, connector: Box<dyn LegacyEngineConnector>) -> Self {
        self.legacy = Some(connector);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when neither a repository nor an
    /// API configuration was provided, or when no transport was set.
    pub fn build(self) -> Result<FeatureStoreClient> {
        let repository: Arc<dyn MetadataRepository> = match self.repository {
            Some(repository) => repository,
            None => {
                let api = self.api.ok_or_else(|| {
                    SdkError::Config("metadata API configuration is required".to_string())
                })?;
                Arc::new(RestRepository::new(api)?)
            }
        };

        let transport = self
            .transport
            .ok_or_else(|| SdkError::Config("a columnar transport is required".to_string()))?;

        let flight = FlightReader::new(self.flight, transport);
        let engine = Arc::new(ReadEngine::new(flight, self.legacy));

        Ok(FeatureStoreClient::new(repository, engine))
    }
}

impl Default for FeatureStoreClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
