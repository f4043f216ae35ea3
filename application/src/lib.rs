//! Application layer for veracity
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{AnalysisParams, RecommendationParams};
pub use ports::{
    event_logger::{AnalysisEvent, AnalysisEventLogger, NoEventLogger},
    key_value_store::{
        CURRENT_ANALYSIS_KEY, KeyValueStore, LAST_RECOMMENDED_KEY, StoreError, resources_key,
    },
    progress::{AnalysisProgressNotifier, NoProgress},
};
pub use use_cases::classify_submission::{
    AnalysisReport, ClassifySubmissionUseCase, CurrentAnalysisRecord,
};
pub use use_cases::orchestrate_analysis::{AnalysisError, AnalysisHandle, AnalysisOrchestrator};
pub use use_cases::recommend_resources::RecommendResourcesUseCase;
pub use use_cases::run_analysis::{AnalysisOutput, RunAnalysisError, RunAnalysisUseCase};
pub use use_cases::shared::{SharedRandom, entropy_random, shared_random};
