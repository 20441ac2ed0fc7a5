//! REST implementation of the metadata repository
//!
//! Fetches catalog descriptors and backend-generated SQL from the
//! feature store's REST metadata API over HTTP/HTTPS, with optional
//! Bearer-token authentication and a configurable timeout.
//!
//! # Endpoints
//!
//! - `GET  /featuregroups/{name}/versions/{version}`
//! - `GET  /featureviews/{name}/versions/{version}`
//! - `GET  /featureviews/{name}/versions/{version}/trainingdatasets/{version}`
//! - `POST /featureviews/{name}/versions/{version}/trainingdatasets`
//! - `POST /query/construct`
//! - `GET  /dataset/files?path={path}`
//! - `GET  /dataset/content?path={path}`

use async_trait::async_trait;
use quiver_core::catalog::{FeatureGroup, FeatureView, TrainingDataset};
use quiver_core::query::Query;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::error::{RepositoryError, RepositoryResult};
use crate::models::{ConstructedQuery, FileListing};
use crate::traits::MetadataRepository;

/// REST metadata repository
pub struct RestRepository {
    /// HTTP client for making requests
    client: Client,

    /// API configuration
    config: ApiConfig,
}

impl RestRepository {
    /// Create a new REST repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ApiConfig) -> RepositoryResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                RepositoryError::ApiError(format!("Failed to create HTTP client: {}", e))
            })?;

        tracing::info!("Initializing metadata API client: {}", config.base_url);
        Ok(Self { client, config })
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.config.api_key {
            Some(ref key) => request.header("Authorization", format!("Bearer {}", key)),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, url: &str) -> RepositoryResult<reqwest::Response> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| RepositoryError::ApiError(format!("Failed to fetch {}: {}", url, e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(RepositoryError::NotFound {
                path: url.to_string(),
            });
        }
        if !response.status().is_success() {
            return Err(RepositoryError::ApiError(format!(
                "API returned error status {} for {}",
                response.status(),
                url
            )));
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> RepositoryResult<T> {
        tracing::debug!("GET {}", url);
        let response = self.send(self.client.get(url), url).await?;
        response.json().await.map_err(|e| {
            RepositoryError::ParseError(format!("Failed to parse response from {}: {}", url, e))
        })
    }
}

#[async_trait]
impl MetadataRepository for RestRepository {
    async fn get_feature_group(
        &self,
        name: &str,
        version: i32,
    ) -> RepositoryResult<FeatureGroup> {
        let url = format!(
            "{}/featuregroups/{}/versions/{}",
            self.config.base_url, name, version
        );
        self.get_json(&url).await
    }

    async fn get_feature_view(&self, name: &str, version: i32) -> RepositoryResult<FeatureView> {
        let url = format!(
            "{}/featureviews/{}/versions/{}",
            self.config.base_url, name, version
        );
        self.get_json(&url).await
    }

    async fn get_training_dataset(
        &self,
        feature_view: &FeatureView,
        version: i32,
    ) -> RepositoryResult<TrainingDataset> {
        let url = format!(
            "{}/featureviews/{}/versions/{}/trainingdatasets/{}",
            self.config.base_url, feature_view.name, feature_view.version, version
        );
        self.get_json(&url).await
    }

    async fn create_training_dataset(
        &self,
        feature_view: &FeatureView,
    ) -> RepositoryResult<TrainingDataset> {
        let url = format!(
            "{}/featureviews/{}/versions/{}/trainingdatasets",
            self.config.base_url, feature_view.name, feature_view.version
        );
        tracing::debug!("POST {}", url);
        let response = self.send(self.client.post(&url), &url).await?;
        response.json().await.map_err(|e| {
            RepositoryError::ParseError(format!("Failed to parse response from {}: {}", url, e))
        })
    }

    async fn construct_query(&self, query: &Query) -> RepositoryResult<ConstructedQuery> {
        let url = format!("{}/query/construct", self.config.base_url);
        tracing::debug!("POST {}", url);
        let response = self.send(self.client.post(&url).json(query), &url).await?;
        response.json().await.map_err(|e| {
            RepositoryError::ParseError(format!("Failed to parse response from {}: {}", url, e))
        })
    }

    async fn list_files(&self, path: &str) -> RepositoryResult<FileListing> {
        let url = format!("{}/dataset/files", self.config.base_url);
        tracing::debug!("GET {} path={}", url, path);
        let response = self
            .send(self.client.get(&url).query(&[("path", path)]), &url)
            .await?;
        response.json().await.map_err(|e| {
            RepositoryError::ParseError(format!("Failed to parse response from {}: {}", url, e))
        })
    }

    async fn read_content(&self, path: &str) -> RepositoryResult<Vec<u8>> {
        let url = format!("{}/dataset/content", self.config.base_url);
        tracing::debug!("GET {} path={}", url, path);
        let response = self
            .send(self.client.get(&url).query(&[("path", path)]), &url)
            .await?;
        let bytes = response.bytes().await.map_err(|e| {
            RepositoryError::ApiError(format!("Failed to read response body: {}", e))
        })?;
        Ok(bytes.to_vec())
    }
}
