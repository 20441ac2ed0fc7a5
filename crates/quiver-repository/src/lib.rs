//! Backend metadata access for the Quiver feature store client
//!
//! This crate provides a unified async interface for fetching catalog
//! descriptors (feature groups, feature views, training datasets) and
//! backend-generated SQL from the feature store's REST metadata API.
//!
//! # Quick Start
//!
//! ```no_run
//! use quiver_repository::{ApiConfig, MetadataRepository, RestRepository};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let repo = RestRepository::new(ApiConfig::new("https://api.example.com/featurestore"))?;
//!
//!     let fg = repo.get_feature_group("transactions", 1).await?;
//!     println!("Loaded feature group: {}", fg.qualified_name());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod rest;
pub mod traits;

// Re-exports - Configuration
pub use config::ApiConfig;

// Re-exports - Error
pub use error::{RepositoryError, RepositoryResult};

// Re-exports - Models
pub use models::{ConstructedQuery, DatasetFile, FileListing};

// Re-exports - Repositories
pub use rest::RestRepository;
pub use traits::MetadataRepository;
