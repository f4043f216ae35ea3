//! Configuration file loading for veracity
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./veracity.toml` or `./.veracity.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/veracity/config.toml`
//! 4. Fallback: `~/.config/veracity/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileAnalysisConfig, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileRecommendationConfig, FileStoreConfig, StoreBackend,
};
pub use loader::ConfigLoader;
