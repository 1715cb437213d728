pub mod dataset;
pub mod dataset_config;

pub use dataset::Dataset;
pub use dataset_config::DatasetConfig;
