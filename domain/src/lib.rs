//! Domain layer for veracity
//!
//! This crate contains the credibility heuristics, the analysis state
//! machine and the recommendation rules. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Classification
//!
//! A [`Submission`] (text, URL or file metadata) is scored by the
//! classifier for its [`Modality`], producing a [`ClassificationResult`]
//! whose [`Outcome`] is one of:
//!
//! - **Acceptable**: credible, score 75 and above
//! - **Partially acceptable**: needs verification, 45 to 74
//! - **Questionable**: likely misleading, below 45
//!
//! ## Analysis timeline
//!
//! An [`AnalysisSession`] walks `processing → analyzing → verifying →
//! complete` on timer events and reveals the result at the end.
//!
//! ## Recommendations
//!
//! Low scores get three trusted [`Resource`]s, never the same three twice
//! in a row.

pub mod analysis;
pub mod assessment;
pub mod classification;
pub mod config;
pub mod core;
pub mod recommendation;
pub mod submission;
pub mod util;

// Re-export commonly used types
pub use analysis::{AnalysisSession, AnalysisSnapshot, AnalysisStage, StageSchedule};
pub use assessment::{Assessment, assess};
pub use classification::{
    AnalysisType, ClassificationDetails, ClassificationResult, ContentType, FileSignals, Outcome,
    ProcessingComplexity, RiskLevel, SourceType, TextSignals, UrlCategory, UrlSignals, classify,
    classify_file, classify_text, classify_url,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use crate::core::{
    error::DomainError,
    random::{RandomSource, SequenceRandom, StdRandom},
};
pub use recommendation::{
    LastRecommendedSet, RecommendationReason, RecommendationRecord, Resource, build_search_query,
    default_catalog, select_resources,
};
pub use submission::{FileMeta, Modality, Submission, SubmissionContent};
