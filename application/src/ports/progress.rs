//! Progress notification port
//!
//! Defines the interface for reporting the analysis timeline.

use veracity_domain::{AnalysisSnapshot, AnalysisStage, ClassificationResult};

/// Callback for progress updates during an analysis
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain lines, etc.). Calls come
/// from the orchestrator's driver task, hence `Send + Sync`.
pub trait AnalysisProgressNotifier: Send + Sync {
    /// Called when a stage is entered, including the initial `Processing`
    fn on_stage_change(&self, stage: AnalysisStage);

    /// Called whenever progress or elapsed time moves
    fn on_progress(&self, snapshot: &AnalysisSnapshot);

    /// Called once when the session reaches `Complete`
    fn on_complete(&self, _result: &ClassificationResult) {}

    /// Called once if the session is cancelled before completing
    fn on_cancelled(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl AnalysisProgressNotifier for NoProgress {
    fn on_stage_change(&self, _stage: AnalysisStage) {}
    fn on_progress(&self, _snapshot: &AnalysisSnapshot) {}
}
