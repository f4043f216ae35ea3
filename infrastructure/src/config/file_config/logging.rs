//! Event log configuration from TOML (`[logging]` section)

use super::expand_home;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write the JSONL analysis event log
    pub event_log: bool,
    /// Directory for event logs; `~` is expanded
    pub event_log_dir: Option<String>,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            event_log: true,
            event_log_dir: None,
        }
    }
}

impl FileLoggingConfig {
    /// Resolved event log directory, `None` when the event log is off
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        if !self.event_log {
            return None;
        }
        match &self.event_log_dir {
            Some(dir) => Some(expand_home(dir)),
            None => dirs::data_dir().map(|d| d.join("veracity").join("logs")),
        }
    }
}
