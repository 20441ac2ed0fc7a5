//! High-level feature store client

use crate::builder::FeatureStoreClientBuilder;
use crate::error::Result;
use quiver_core::catalog::{FeatureGroup, FeatureView, TrainingDataset, TrainingDatasetType};
use quiver_core::query::Query;
use quiver_engine::{EngineError, ReadEngine, ReadOptions, Table};
use quiver_repository::{MetadataRepository, RepositoryError};
use std::sync::Arc;

/// Client for reading feature data out of a feature store
///
/// Holds the metadata repository and the read engine explicitly;
/// callers share a client behind `Arc` for concurrent reads. All
/// configuration is fixed at construction time.
pub struct FeatureStoreClient {
    repository: Arc<dyn MetadataRepository>,
    engine: Arc<ReadEngine>,
}

impl FeatureStoreClient {
    pub fn new(repository: Arc<dyn MetadataRepository>, engine: Arc<ReadEngine>) -> Self {
        Self { repository, engine }
    }

    pub fn builder() -> FeatureStoreClientBuilder {
        FeatureStoreClientBuilder::new()
    }

    /// Fetch a feature group descriptor.
    pub async fn get_feature_group(&self, name: &str, version: i32) -> Result<FeatureGroup> {
        Ok(self.repository.get_feature_group(name, version).await?)
    }

    /// Fetch a feature view descriptor.
    pub async fn get_feature_view(&self, name: &str, version: i32) -> Result<FeatureView> {
        Ok(self.repository.get_feature_view(name, version).await?)
    }

    /// Read the rows selected by `query`.
    ///
    /// The SQL string is generated by the backend; the read itself is
    /// dispatched to the transfer service or the legacy engine
    /// according to `options`.
    pub async fn read(&self, query: &Query, options: &ReadOptions) -> Result<Table> {
        let constructed = self.repository.construct_query(query).await?;
        Ok(self
            .engine
            .read_query(query, &constructed.query, options)
            .await?)
    }

    /// Read an entire feature group.
    pub async fn read_feature_group(
        &self,
        feature_group: &FeatureGroup,
        options: &ReadOptions,
    ) -> Result<Table> {
        self.read(&feature_group.select_all(), options).await
    }

    /// Produce training data for a feature view.
    ///
    /// Registers a new in-memory training dataset version, then reads
    /// the view's batch query.
    pub async fn training_data(
        &self,
        feature_view: &FeatureView,
        options: &ReadOptions,
    ) -> Result<(TrainingDataset, Table)> {
        let dataset = self.repository.create_training_dataset(feature_view).await?;
        tracing::debug!(
            "Created training dataset version {} for feature view {}",
            dataset.version,
            feature_view.name
        );
        let table = self.read(&feature_view.query, options).await?;
        Ok((dataset, table))
    }

    /// Read batch scoring data for a feature view.
    pub async fn batch_data(
        &self,
        feature_view: &FeatureView,
        options: &ReadOptions,
    ) -> Result<Table> {
        self.read(&feature_view.query, options).await
    }

    /// Read a previously created training dataset version.
    ///
    /// In-memory versions re-read the view's batch query. Materialized
    /// versions are read from their data files through the transfer
    /// service; the legacy engine cannot serve them.
    pub async fn training_data_for_version(
        &self,
        feature_view: &FeatureView,
        version: i32,
        options: &ReadOptions,
    ) -> Result<Table> {
        let dataset = self
            .repository
            .get_training_dataset(feature_view, version)
            .await?;

        match dataset.dataset_type {
            TrainingDatasetType::InMemory => self.read(&feature_view.query, options).await,
            TrainingDatasetType::Materialized => {
                if options.use_legacy_engine {
                    return Err(EngineError::Unsupported(
                        "materialized dataset reads require the transfer service".to_string(),
                    )
                    .into());
                }
                let listing = self.repository.list_files(&dataset.location).await?;
                let file = listing.files.first().ok_or_else(|| {
                    RepositoryError::NotFound {
                        path: dataset.location.clone(),
                    }
                })?;
                Ok(self.engine.read_path(&file.path).await?)
            }
        }
    }
}
