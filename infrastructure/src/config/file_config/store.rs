//! Store configuration from TOML (`[store]` section)

use super::expand_home;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use veracity_domain::ConfigIssue;

/// Where persisted analysis state lives
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreBackend {
    /// Single JSON file on disk
    #[default]
    File,
    /// Process memory, gone on exit
    Memory,
}

impl StoreBackend {
    pub const VALID_VALUES: [&'static str; 2] = ["file", "memory"];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::File => "file",
            StoreBackend::Memory => "memory",
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" | "json" => Ok(StoreBackend::File),
            "memory" | "mem" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend '{}'", other)),
        }
    }
}

/// Raw store configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// "file" or "memory"
    pub backend: String,
    /// Store file; `~` is expanded. Defaults to the user data directory.
    pub path: Option<String>,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default().as_str().to_string(),
            path: None,
        }
    }
}

impl FileStoreConfig {
    /// Parse backend string into [`StoreBackend`]
    pub fn parse_backend(&self) -> (StoreBackend, Vec<ConfigIssue>) {
        match self.backend.parse::<StoreBackend>() {
            Ok(backend) => (backend, vec![]),
            Err(_) => (
                StoreBackend::default(),
                vec![ConfigIssue::invalid_enum(
                    "store.backend",
                    &self.backend,
                    &StoreBackend::VALID_VALUES,
                    StoreBackend::default().as_str(),
                )],
            ),
        }
    }

    /// Resolved store file path
    pub fn resolved_path(&self) -> Option<PathBuf> {
        match &self.path {
            Some(path) => Some(expand_home(path)),
            None => dirs::data_dir().map(|d| d.join("veracity").join("store.json")),
        }
    }
}
