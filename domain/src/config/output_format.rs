//! Output format value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a finished analysis is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Verdict, findings and recommendations
    #[default]
    Full,
    /// One line per analysis
    Summary,
    /// Machine-readable JSON
    Json,
}

impl OutputFormat {
    pub const VALID_VALUES: [&'static str; 3] = ["full", "summary", "json"];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Full => "full",
            OutputFormat::Summary => "summary",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(OutputFormat::Full),
            "summary" | "short" => Ok(OutputFormat::Summary),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}
