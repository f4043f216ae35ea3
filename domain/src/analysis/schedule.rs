//! Stage timing

use super::stage::AnalysisStage;
use crate::classification::ProcessingComplexity;
use std::time::Duration;

/// Dwell times per stage plus the two tick periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageSchedule {
    pub processing: Duration,
    pub analyzing: Duration,
    pub verifying: Duration,
    /// Period of the progress counter
    pub progress_tick: Duration,
    /// Period of the elapsed-seconds counter
    pub elapsed_tick: Duration,
}

impl Default for StageSchedule {
    fn default() -> Self {
        Self {
            processing: Duration::from_secs(3),
            analyzing: Duration::from_secs(4),
            verifying: Duration::from_secs(3),
            progress_tick: Duration::from_millis(200),
            elapsed_tick: Duration::from_secs(1),
        }
    }
}

impl StageSchedule {
    /// How long `stage` lasts before the next transition; `None` once complete.
    pub fn dwell(&self, stage: AnalysisStage) -> Option<Duration> {
        match stage {
            AnalysisStage::Processing => Some(self.processing),
            AnalysisStage::Analyzing => Some(self.analyzing),
            AnalysisStage::Verifying => Some(self.verifying),
            AnalysisStage::Complete => None,
        }
    }

    /// Stretch every dwell time by the complexity factor. Tick periods stay.
    pub fn scaled(&self, complexity: ProcessingComplexity) -> Self {
        let factor = complexity.duration_factor();
        Self {
            processing: self.processing.mul_f64(factor),
            analyzing: self.analyzing.mul_f64(factor),
            verifying: self.verifying.mul_f64(factor),
            ..*self
        }
    }

    /// Time from start to `Complete`.
    pub fn total(&self) -> Duration {
        self.processing + self.analyzing + self.verifying
    }
}
