//! Infrastructure layer for veracity
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileAnalysisConfig, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileRecommendationConfig, FileStoreConfig, StoreBackend,
};
pub use logging::JsonlAnalysisLogger;
pub use store::{JsonFileStore, MemoryStore};
