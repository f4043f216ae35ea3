//! Analysis session state machine
//!
//! [`AnalysisSession`] holds the state of one analysis and exposes one
//! method per timer event. It knows nothing about clocks: whoever owns the
//! timers calls [`AnalysisSession::on_progress_tick`],
//! [`AnalysisSession::on_elapsed_tick`] and
//! [`AnalysisSession::advance_stage`] when they fire.
//!
//! Once the session is complete or cancelled every event is ignored.

use super::stage::AnalysisStage;
use crate::classification::ClassificationResult;
use crate::submission::Submission;
use serde::{Deserialize, Serialize};

/// Observable state of a session at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    pub stage: AnalysisStage,
    pub progress: u8,
    pub elapsed_seconds: u32,
}

impl AnalysisSnapshot {
    pub fn initial() -> Self {
        Self {
            stage: AnalysisStage::Processing,
            progress: 0,
            elapsed_seconds: 0,
        }
    }
}

/// One running analysis (Entity)
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    id: String,
    submission: Submission,
    result: ClassificationResult,
    stage: AnalysisStage,
    progress: u8,
    elapsed_seconds: u32,
    cancelled: bool,
}

impl AnalysisSession {
    /// Start a session for a submission already classified at intake.
    pub fn new(submission: Submission, result: ClassificationResult) -> Self {
        Self {
            id: submission.analysis_id(),
            submission,
            result,
            stage: AnalysisStage::Processing,
            progress: 0,
            elapsed_seconds: 0,
            cancelled: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    pub fn stage(&self) -> AnalysisStage {
        self.stage
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn snapshot(&self) -> AnalysisSnapshot {
        AnalysisSnapshot {
            stage: self.stage,
            progress: self.progress,
            elapsed_seconds: self.elapsed_seconds,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.stage.is_terminal()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Still accepting timer events
    pub fn is_active(&self) -> bool {
        !self.cancelled && !self.is_complete()
    }

    /// Progress timer fired. Returns `true` if progress moved.
    pub fn on_progress_tick(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        let next = self
            .progress
            .saturating_add(self.stage.progress_step())
            .min(self.stage.progress_ceiling())
            .max(self.progress);
        let moved = next != self.progress;
        self.progress = next;
        moved
    }

    /// Elapsed-seconds timer fired. Returns `true` if the counter moved.
    pub fn on_elapsed_tick(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.elapsed_seconds += 1;
        true
    }

    /// Stage timer fired: move to the next stage.
    ///
    /// Entering `Complete` pins progress at 100. Returns the new stage, or
    /// `None` if the session no longer accepts events.
    pub fn advance_stage(&mut self) -> Option<AnalysisStage> {
        if !self.is_active() {
            return None;
        }
        self.stage = self.stage.next();
        if self.stage.is_terminal() {
            self.progress = AnalysisStage::Complete.progress_ceiling();
        }
        Some(self.stage)
    }

    /// Stop the session. Later events are ignored.
    pub fn cancel(&mut self) {
        if !self.is_complete() {
            self.cancelled = true;
        }
    }

    /// The classification computed at intake, available once complete.
    pub fn final_result(&self) -> Option<&ClassificationResult> {
        if self.is_complete() {
            Some(&self.result)
        } else {
            None
        }
    }

    /// Consume the session, yielding the result if it completed.
    pub fn into_result(self) -> Option<ClassificationResult> {
        if self.is_complete() {
            Some(self.result)
        } else {
            None
        }
    }
}
