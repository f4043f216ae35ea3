//! Analysis stages

use serde::{Deserialize, Serialize};

/// One state of the analysis timeline.
///
/// The order is fixed: `Processing → Analyzing → Verifying → Complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStage {
    Processing,
    Analyzing,
    Verifying,
    Complete,
}

impl AnalysisStage {
    pub const SEQUENCE: [AnalysisStage; 4] = [
        AnalysisStage::Processing,
        AnalysisStage::Analyzing,
        AnalysisStage::Verifying,
        AnalysisStage::Complete,
    ];

    /// The following stage; `Complete` is terminal and maps to itself.
    pub fn next(&self) -> AnalysisStage {
        match self {
            AnalysisStage::Processing => AnalysisStage::Analyzing,
            AnalysisStage::Analyzing => AnalysisStage::Verifying,
            AnalysisStage::Verifying | AnalysisStage::Complete => AnalysisStage::Complete,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, AnalysisStage::Complete)
    }

    /// Progress can not pass this value while the stage is active.
    pub fn progress_ceiling(&self) -> u8 {
        match self {
            AnalysisStage::Processing => 25,
            AnalysisStage::Analyzing => 60,
            AnalysisStage::Verifying => 90,
            AnalysisStage::Complete => 100,
        }
    }

    /// Progress added per progress tick.
    pub fn progress_step(&self) -> u8 {
        match self {
            AnalysisStage::Processing => 2,
            AnalysisStage::Analyzing => 2,
            AnalysisStage::Verifying => 3,
            AnalysisStage::Complete => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisStage::Processing => "processing",
            AnalysisStage::Analyzing => "analyzing",
            AnalysisStage::Verifying => "verifying",
            AnalysisStage::Complete => "complete",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AnalysisStage::Processing => "Processing submission",
            AnalysisStage::Analyzing => "Analyzing content",
            AnalysisStage::Verifying => "Verifying sources",
            AnalysisStage::Complete => "Analysis complete",
        }
    }
}

impl std::fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
