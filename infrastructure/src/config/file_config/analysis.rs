//! Analysis timing from TOML (`[analysis]` section)

use serde::{Deserialize, Serialize};
use veracity_application::AnalysisParams;
use veracity_domain::{ConfigIssue, ConfigIssueCode};

/// Raw analysis timing configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnalysisConfig {
    pub processing_ms: u64,
    pub analyzing_ms: u64,
    pub verifying_ms: u64,
    pub progress_tick_ms: u64,
    pub elapsed_tick_ms: u64,
}

impl Default for FileAnalysisConfig {
    fn default() -> Self {
        let params = AnalysisParams::default();
        Self {
            processing_ms: params.processing_ms,
            analyzing_ms: params.analyzing_ms,
            verifying_ms: params.verifying_ms,
            progress_tick_ms: params.progress_tick_ms,
            elapsed_tick_ms: params.elapsed_tick_ms,
        }
    }
}

impl FileAnalysisConfig {
    /// Convert to [`AnalysisParams`]. Zero durations fall back to defaults.
    pub fn to_params(&self) -> (AnalysisParams, Vec<ConfigIssue>) {
        let defaults = AnalysisParams::default();
        let mut issues = Vec::new();
        let mut pick = |field: &str, value: u64, fallback: u64| {
            if value == 0 {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::ZeroDuration {
                        field: format!("analysis.{}", field),
                    },
                    format!(
                        "analysis.{}: must be greater than 0, falling back to {}",
                        field, fallback
                    ),
                ));
                fallback
            } else {
                value
            }
        };

        let params = AnalysisParams {
            processing_ms: pick("processing_ms", self.processing_ms, defaults.processing_ms),
            analyzing_ms: pick("analyzing_ms", self.analyzing_ms, defaults.analyzing_ms),
            verifying_ms: pick("verifying_ms", self.verifying_ms, defaults.verifying_ms),
            progress_tick_ms: pick(
                "progress_tick_ms",
                self.progress_tick_ms,
                defaults.progress_tick_ms,
            ),
            elapsed_tick_ms: pick(
                "elapsed_tick_ms",
                self.elapsed_tick_ms,
                defaults.elapsed_tick_ms,
            ),
        };
        (params, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_durations_fall_back() {
        let config = FileAnalysisConfig {
            processing_ms: 0,
            progress_tick_ms: 0,
            ..Default::default()
        };
        let (params, issues) = config.to_params();
        assert_eq!(params, AnalysisParams::default());
        assert_eq!(issues.len(), 2);
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::ZeroDuration {
                field: "analysis.processing_ms".to_string()
            }
        );
    }
}
