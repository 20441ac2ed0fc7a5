//! Catalog descriptors fetched from the backend metadata API

pub mod feature;
pub mod feature_group;
pub mod feature_view;
pub mod training_dataset;

pub use feature::Feature;
pub use feature_group::FeatureGroup;
pub use feature_view::FeatureView;
pub use training_dataset::{TrainingDataset, TrainingDatasetType};
