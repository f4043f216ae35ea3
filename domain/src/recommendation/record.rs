//! Recommendation records

use super::resource::Resource;
use crate::classification::Outcome;
use serde::{Deserialize, Serialize};

/// Why sources were recommended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationReason {
    PartiallyAcceptable,
    Questionable,
}

impl RecommendationReason {
    /// `Questionable` below `questionable_below`, otherwise `PartiallyAcceptable`.
    pub fn from_score(score: u8, questionable_below: u8) -> Self {
        if score < questionable_below {
            RecommendationReason::Questionable
        } else {
            RecommendationReason::PartiallyAcceptable
        }
    }

    pub fn as_outcome(&self) -> Outcome {
        match self {
            RecommendationReason::PartiallyAcceptable => Outcome::PartiallyAcceptable,
            RecommendationReason::Questionable => Outcome::Questionable,
        }
    }
}

/// Sources suggested for one analysis. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub analysis_id: String,
    pub sources: Vec<Resource>,
    pub search_query: String,
    pub reason: RecommendationReason,
}

impl RecommendationRecord {
    pub fn source_names(&self) -> Vec<String> {
        self.sources.iter().map(|r| r.name.clone()).collect()
    }
}

/// Names of the sources shown by the previous recommendation.
///
/// Persisted as a bare JSON array of names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LastRecommendedSet {
    pub resource_names: Vec<String>,
}

impl LastRecommendedSet {
    pub fn new(resource_names: Vec<String>) -> Self {
        Self { resource_names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resource_names.iter().any(|n| n == name)
    }
}
