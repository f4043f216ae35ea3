//! Classify Submission use case.
//!
//! Submission intake: scores the submission, derives the assessment,
//! records it as the current analysis and returns synchronously.

use crate::ports::event_logger::{AnalysisEvent, AnalysisEventLogger, NoEventLogger};
use crate::ports::key_value_store::{CURRENT_ANALYSIS_KEY, KeyValueStore, save_json};
use crate::use_cases::shared::{SharedRandom, lock_random};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};
use veracity_domain::util::truncate_str;
use veracity_domain::{Assessment, ClassificationResult, Modality, Submission, classify};

/// The record persisted under `currentAnalysis`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentAnalysisRecord {
    #[serde(rename = "type")]
    pub modality: Modality,
    pub content: String,
    pub analysis: ClassificationResult,
    pub timestamp: DateTime<Utc>,
}

/// Result of intake.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub analysis_id: String,
    pub submission: Submission,
    pub result: ClassificationResult,
    pub assessment: Assessment,
}

/// Use case for classifying a submission.
pub struct ClassifySubmissionUseCase {
    store: Arc<dyn KeyValueStore>,
    random: SharedRandom,
    event_logger: Arc<dyn AnalysisEventLogger>,
}

impl ClassifySubmissionUseCase {
    pub fn new(store: Arc<dyn KeyValueStore>, random: SharedRandom) -> Self {
        Self {
            store,
            random,
            event_logger: Arc::new(NoEventLogger),
        }
    }

    /// Create with an analysis event logger.
    pub fn with_event_logger(mut self, logger: Arc<dyn AnalysisEventLogger>) -> Self {
        self.event_logger = logger;
        self
    }

    /// Classify `submission`. Never fails: malformed or empty input yields a
    /// questionable result.
    pub fn execute(&self, submission: Submission) -> AnalysisReport {
        let analysis_id = submission.analysis_id();
        info!(
            "Classifying {} submission {}: {}",
            submission.modality(),
            analysis_id,
            truncate_str(submission.snippet(), 80)
        );

        let result = {
            let mut random = lock_random(&self.random);
            classify(&submission, &mut *random)
        };
        let assessment = Assessment::of(&result);

        debug!(
            "Submission {} scored {} ({})",
            analysis_id,
            result.score,
            result.outcome.as_str()
        );

        let record = CurrentAnalysisRecord {
            modality: submission.modality(),
            content: submission.snippet().to_string(),
            analysis: result.clone(),
            timestamp: submission.submitted_at(),
        };
        save_json(self.store.as_ref(), CURRENT_ANALYSIS_KEY, &record);

        self.event_logger.log(AnalysisEvent::new(
            "submission_classified",
            serde_json::json!({
                "analysis_id": analysis_id,
                "modality": submission.modality().as_str(),
                "score": result.score,
                "outcome": result.outcome.as_str(),
                "severity": assessment.severity_label,
            }),
        ));

        AnalysisReport {
            analysis_id,
            submission,
            result,
            assessment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::event_logger::testing::RecordingEventLogger;
    use crate::ports::key_value_store::load_json;
    use crate::ports::key_value_store::testing::MockStore;
    use crate::use_cases::shared::shared_random;
    use veracity_domain::{FileMeta, Outcome, SequenceRandom};

    fn use_case(store: Arc<MockStore>) -> ClassifySubmissionUseCase {
        ClassifySubmissionUseCase::new(store, shared_random(SequenceRandom::zeros()))
    }

    #[test]
    fn test_trusted_text_is_acceptable_and_persisted() {
        let store = Arc::new(MockStore::new());
        let uc = use_case(store.clone());

        let report = uc.execute(Submission::text(
            "A peer-reviewed clinical trial (2021) found the vaccine effective.",
        ));

        assert_eq!(report.result.outcome, Outcome::Acceptable);
        assert!((80..100).contains(&report.result.score));
        assert_eq!(report.assessment.outcome, Outcome::Acceptable);

        let record: CurrentAnalysisRecord =
            load_json(store.as_ref(), CURRENT_ANALYSIS_KEY).expect("record persisted");
        assert_eq!(record.modality, Modality::Text);
        assert_eq!(record.analysis, report.result);
        assert_eq!(record.timestamp, report.submission.submitted_at());
    }

    #[test]
    fn test_invalid_url_is_deterministic() {
        let uc = use_case(Arc::new(MockStore::new()));
        let report = uc.execute(Submission::url("not a url"));
        assert_eq!(report.result.outcome, Outcome::Questionable);
        assert_eq!(report.result.score, 10);
    }

    #[test]
    fn test_empty_file_name_is_questionable() {
        let uc = use_case(Arc::new(MockStore::new()));
        let report = uc.execute(Submission::file(FileMeta::new("", "application/pdf", 10)));
        assert_eq!(report.result.outcome, Outcome::Questionable);
        assert_eq!(report.result.score, 10);
    }

    #[test]
    fn test_store_failure_does_not_fail_intake() {
        let uc = use_case(Arc::new(MockStore::unavailable()));
        let report = uc.execute(Submission::url("https://www.cdc.gov/flu"));
        assert_eq!(report.result.outcome, Outcome::Acceptable);
    }

    #[test]
    fn test_logs_classified_event() {
        let logger = Arc::new(RecordingEventLogger::default());
        let uc = use_case(Arc::new(MockStore::new())).with_event_logger(logger.clone());

        let report = uc.execute(Submission::url("https://www.cdc.gov/flu"));

        assert_eq!(logger.event_types(), vec!["submission_classified"]);
        let payload = &logger.payloads("submission_classified")[0];
        assert_eq!(payload["analysis_id"], report.analysis_id);
        assert_eq!(payload["modality"], "url");
        assert_eq!(payload["outcome"], "acceptable");
    }
}
