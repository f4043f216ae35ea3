//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use veracity_domain::{ConfigIssue, OutputFormat};

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// "full", "summary" or "json"
    pub format: String,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default().as_str().to_string(),
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Parse format string into [`OutputFormat`]
    pub fn parse_format(&self) -> (OutputFormat, Vec<ConfigIssue>) {
        match self.format.parse::<OutputFormat>() {
            Ok(format) => (format, vec![]),
            Err(_) => (
                OutputFormat::default(),
                vec![ConfigIssue::invalid_enum(
                    "output.format",
                    &self.format,
                    &OutputFormat::VALID_VALUES,
                    OutputFormat::default().as_str(),
                )],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_deserialize() {
        let toml_str = r#"
[output]
format = "json"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.parse_format().0, OutputFormat::Json);
    }
}
