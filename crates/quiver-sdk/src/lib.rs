//! Quiver Feature Store SDK
//!
//! High-level API for building queries against a feature store and
//! reading their results through the columnar transfer service or the
//! legacy SQL engine.

pub mod builder;
pub mod client;
pub mod config;
pub mod error;

// Re-export main types
pub use builder::FeatureStoreClientBuilder;
pub use client::FeatureStoreClient;
pub use config::ClientConfig;
pub use error::{Result, SdkError};

// Re-export commonly used types from dependencies
pub use quiver_core::catalog::{
    Feature, FeatureGroup, FeatureView, TrainingDataset, TrainingDatasetType,
};
pub use quiver_core::query::Query;
pub use quiver_core::Value;
pub use quiver_engine::{ReadOptions, Table};
