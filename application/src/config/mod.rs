//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`AnalysisParams`]: stage dwell times and tick periods
//! - [`RecommendationParams`]: when sources are recommended

pub mod analysis_params;
pub mod recommendation_params;

pub use analysis_params::AnalysisParams;
pub use recommendation_params::RecommendationParams;
