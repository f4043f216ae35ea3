//! Recommendation thresholds.

use serde::{Deserialize, Serialize};

/// When the recommendation engine runs, and how it labels the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationParams {
    /// Scores at or above this get no recommendation.
    pub threshold: u8,
    /// Scores below this are recommended for as `questionable`.
    pub questionable_below: u8,
}

impl Default for RecommendationParams {
    fn default() -> Self {
        Self {
            threshold: 70,
            questionable_below: 40,
        }
    }
}

impl RecommendationParams {
    pub fn should_recommend(&self, score: u8) -> bool {
        score < self.threshold
    }

    // ==================== Builder Methods ====================

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_questionable_below(mut self, below: u8) -> Self {
        self.questionable_below = below;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        let params = RecommendationParams::default();
        assert!(params.should_recommend(69));
        assert!(!params.should_recommend(70));
        assert_eq!(params.questionable_below, 40);
    }

    #[test]
    fn test_builder() {
        let params = RecommendationParams::default()
            .with_threshold(50)
            .with_questionable_below(20);
        assert!(!params.should_recommend(50));
        assert_eq!(params.questionable_below, 20);
    }
}
