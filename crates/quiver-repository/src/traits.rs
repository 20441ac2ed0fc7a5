//! Repository trait for backend metadata access

use async_trait::async_trait;
use quiver_core::catalog::{FeatureGroup, FeatureView, TrainingDataset};
use quiver_core::query::Query;

use crate::error::RepositoryResult;
use crate::models::{ConstructedQuery, FileListing};

/// Unified interface for the backend metadata API
///
/// Implemented by [`RestRepository`](crate::rest::RestRepository); read
/// operations only consume already-parsed descriptor objects, so test
/// doubles can implement this trait without any HTTP machinery.
#[async_trait]
pub trait MetadataRepository: Send + Sync {
    /// Fetch a feature group descriptor by name and version.
    async fn get_feature_group(&self, name: &str, version: i32)
        -> RepositoryResult<FeatureGroup>;

    /// Fetch a feature view descriptor by name and version.
    async fn get_feature_view(&self, name: &str, version: i32) -> RepositoryResult<FeatureView>;

    /// Fetch a training dataset version of a feature view.
    async fn get_training_dataset(
        &self,
        feature_view: &FeatureView,
        version: i32,
    ) -> RepositoryResult<TrainingDataset>;

    /// Register a new in-memory training dataset for a feature view.
    async fn create_training_dataset(
        &self,
        feature_view: &FeatureView,
    ) -> RepositoryResult<TrainingDataset>;

    /// Ask the backend to generate SQL for a client-built query.
    async fn construct_query(&self, query: &Query) -> RepositoryResult<ConstructedQuery>;

    /// List the data files under a dataset path.
    async fn list_files(&self, path: &str) -> RepositoryResult<FileListing>;

    /// Read the raw content of a dataset file.
    async fn read_content(&self, path: &str) -> RepositoryResult<Vec<u8>>;
}
