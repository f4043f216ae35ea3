//! Reference source recommendations
//!
//! Low-scoring analyses get three trusted sources to cross-check against.
//! The sources shown last time are skipped, so two consecutive analyses do
//! not suggest the same set.

pub mod query;
pub mod record;
pub mod resource;
pub mod selection;

pub use query::{DEFAULT_TOPIC, SEARCH_SITES, build_search_query, detect_topic};
pub use record::{LastRecommendedSet, RecommendationReason, RecommendationRecord};
pub use resource::{Resource, default_catalog};
pub use selection::{RECOMMENDATION_SIZE, select_resources};
