//! Credibility classification
//!
//! One heuristic classifier per modality. Each is a pure function of the
//! payload and an injected [`RandomSource`]; none of them does I/O.
//!
//! ```text
//!   Submission ──► classify() ──┬─► classify_text()  ─┐
//!                               ├─► classify_url()   ─┼─► ClassificationResult
//!                               └─► classify_file()  ─┘     {score, outcome, details}
//! ```
//!
//! Deterministic rules decide clear-cut inputs. Inputs that match no rule
//! draw their outcome uniformly at random, so a demo shows all three
//! verdicts for neutral content.

pub mod file;
pub mod lexicon;
pub mod outcome;
pub mod result;
pub mod text;
pub mod url;

pub use file::classify_file;
pub use outcome::{AmbiguousBands, BandThresholds, Outcome, RiskLevel, ScoreBand};
pub use result::{
    AnalysisType, ClassificationDetails, ClassificationResult, ContentType, FileSignals,
    ProcessingComplexity, SourceType, TextSignals, UrlCategory, UrlSignals,
};
pub use text::classify_text;
pub use url::{INVALID_URL_SCORE, classify_url};

use crate::core::random::RandomSource;
use crate::submission::{Submission, SubmissionContent};

/// Score given to blank text or a file without a name
pub const EMPTY_CONTENT_SCORE: u8 = 10;

/// Dispatch a submission to the classifier for its modality.
pub fn classify(submission: &Submission, random: &mut dyn RandomSource) -> ClassificationResult {
    match submission.content() {
        SubmissionContent::Text(text) => classify_text(text, random),
        SubmissionContent::Url(url) => classify_url(url, random),
        SubmissionContent::File(meta) => classify_file(meta, random),
    }
}
