//! Analysis timing parameters.
//!
//! [`AnalysisParams`] holds the stage dwell times and tick periods of the
//! analysis timeline in milliseconds, the way they appear in the config
//! file. [`AnalysisParams::schedule`] turns them into a domain
//! [`StageSchedule`].

use serde::{Deserialize, Serialize};
use std::time::Duration;
use veracity_domain::StageSchedule;

/// Timeline control parameters.
///
/// Used by [`AnalysisOrchestrator`](crate::use_cases::orchestrate_analysis::AnalysisOrchestrator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisParams {
    /// Dwell time of the processing stage.
    pub processing_ms: u64,
    /// Dwell time of the analyzing stage.
    pub analyzing_ms: u64,
    /// Dwell time of the verifying stage.
    pub verifying_ms: u64,
    /// Period of the progress counter.
    pub progress_tick_ms: u64,
    /// Period of the elapsed-seconds counter.
    pub elapsed_tick_ms: u64,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            processing_ms: 3000,
            analyzing_ms: 4000,
            verifying_ms: 3000,
            progress_tick_ms: 200,
            elapsed_tick_ms: 1000,
        }
    }
}

impl AnalysisParams {
    /// Build the domain schedule. Tick periods are clamped to at least 1 ms.
    pub fn schedule(&self) -> StageSchedule {
        StageSchedule {
            processing: Duration::from_millis(self.processing_ms),
            analyzing: Duration::from_millis(self.analyzing_ms),
            verifying: Duration::from_millis(self.verifying_ms),
            progress_tick: Duration::from_millis(self.progress_tick_ms.max(1)),
            elapsed_tick: Duration::from_millis(self.elapsed_tick_ms.max(1)),
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_stage_durations(mut self, processing_ms: u64, analyzing_ms: u64, verifying_ms: u64) -> Self {
        self.processing_ms = processing_ms;
        self.analyzing_ms = analyzing_ms;
        self.verifying_ms = verifying_ms;
        self
    }

    pub fn with_progress_tick_ms(mut self, ms: u64) -> Self {
        self.progress_tick_ms = ms;
        self
    }

    pub fn with_elapsed_tick_ms(mut self, ms: u64) -> Self {
        self.elapsed_tick_ms = ms;
        self
    }
}
