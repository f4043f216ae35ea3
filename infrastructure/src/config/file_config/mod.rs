//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Enum-like fields stay strings here so an unknown value becomes a
//! [`ConfigIssue`] instead of a load failure.

mod analysis;
mod logging;
mod output;
mod recommendation;
mod store;

pub use analysis::FileAnalysisConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use recommendation::FileRecommendationConfig;
pub use store::{FileStoreConfig, StoreBackend};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use veracity_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Stage timing
    pub analysis: FileAnalysisConfig,
    /// Recommendation thresholds
    pub recommendation: FileRecommendationConfig,
    /// Persisted state
    pub store: FileStoreConfig,
    /// Analysis event log
    pub logging: FileLoggingConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks, per section:
    /// 1. `[analysis]` zero durations
    /// 2. `[recommendation]` scores outside 0..=100
    /// 3. `[store]` unknown backend
    /// 4. `[output]` unknown format
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.analysis.to_params().1);
        issues.extend(self.recommendation.to_params().1);
        issues.extend(self.store.parse_backend().1);
        issues.extend(self.output.parse_format().1);
        issues
    }
}

/// Expand a leading `~` to the home directory.
pub(crate) fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return home;
    }
    PathBuf::from(path)
}
