//! Recommendation thresholds from TOML (`[recommendation]` section)

use serde::{Deserialize, Serialize};
use veracity_application::RecommendationParams;
use veracity_domain::{ConfigIssue, ConfigIssueCode};

/// Raw recommendation configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRecommendationConfig {
    /// Scores below this get sources recommended
    pub threshold: i64,
    /// Scores below this are labelled questionable
    pub questionable_below: i64,
}

impl Default for FileRecommendationConfig {
    fn default() -> Self {
        let params = RecommendationParams::default();
        Self {
            threshold: params.threshold.into(),
            questionable_below: params.questionable_below.into(),
        }
    }
}

impl FileRecommendationConfig {
    /// Convert to [`RecommendationParams`]. Out-of-range values fall back.
    pub fn to_params(&self) -> (RecommendationParams, Vec<ConfigIssue>) {
        let defaults = RecommendationParams::default();
        let mut issues = Vec::new();

        let threshold = score_field("recommendation.threshold", self.threshold, defaults.threshold, &mut issues);
        let questionable_below = score_field(
            "recommendation.questionable_below",
            self.questionable_below,
            defaults.questionable_below,
            &mut issues,
        );

        (
            RecommendationParams {
                threshold,
                questionable_below,
            },
            issues,
        )
    }
}

fn score_field(field: &str, value: i64, fallback: u8, issues: &mut Vec<ConfigIssue>) -> u8 {
    match u8::try_from(value) {
        Ok(score) if score <= 100 => score,
        _ => {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: field.to_string(),
                    value,
                    min: 0,
                    max: 100,
                },
                format!(
                    "{}: {} is outside 0..=100, falling back to {}",
                    field, value, fallback
                ),
            ));
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roundtrip() {
        let (params, issues) = FileRecommendationConfig::default().to_params();
        assert_eq!(params, RecommendationParams::default());
        assert!(issues.is_empty());
    }

    #[test]
    fn test_out_of_range() {
        let config = FileRecommendationConfig {
            threshold: 150,
            questionable_below: -1,
        };
        let (params, issues) = config.to_params();
        assert_eq!(params, RecommendationParams::default());
        assert_eq!(issues.len(), 2);
    }
}
