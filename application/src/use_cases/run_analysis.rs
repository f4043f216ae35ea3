//! Run Analysis use case.
//!
//! The full pipeline for one submission:
//!
//! 1. Classify and assess ([`ClassifySubmissionUseCase`])
//! 2. Run the staged timeline ([`AnalysisOrchestrator`])
//! 3. On `complete`, recommend sources if the score is below the threshold
//!    ([`RecommendResourcesUseCase`])

use crate::use_cases::classify_submission::{AnalysisReport, ClassifySubmissionUseCase};
use crate::use_cases::orchestrate_analysis::{AnalysisError, AnalysisOrchestrator};
use crate::use_cases::recommend_resources::RecommendResourcesUseCase;
use serde::Serialize;
use thiserror::Error;
use tracing::info;
use veracity_domain::{RecommendationRecord, Submission};

/// Errors that can occur during a full analysis run.
#[derive(Error, Debug)]
pub enum RunAnalysisError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl RunAnalysisError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RunAnalysisError::Analysis(AnalysisError::Cancelled))
    }
}

/// Output of a completed analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutput {
    #[serde(flatten)]
    pub report: AnalysisReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<RecommendationRecord>,
}

/// Use case for running a submission through the whole pipeline.
pub struct RunAnalysisUseCase {
    classifier: ClassifySubmissionUseCase,
    orchestrator: AnalysisOrchestrator,
    recommender: RecommendResourcesUseCase,
}

impl RunAnalysisUseCase {
    pub fn new(
        classifier: ClassifySubmissionUseCase,
        orchestrator: AnalysisOrchestrator,
        recommender: RecommendResourcesUseCase,
    ) -> Self {
        Self {
            classifier,
            orchestrator,
            recommender,
        }
    }

    pub fn orchestrator(&self) -> &AnalysisOrchestrator {
        &self.orchestrator
    }

    pub async fn execute(&self, submission: Submission) -> Result<AnalysisOutput, RunAnalysisError> {
        let report = self.classifier.execute(submission);

        let handle = self
            .orchestrator
            .start(report.submission.clone(), report.result.clone());
        let result = handle.wait().await?;

        let recommendation =
            self.recommender
                .recommend(&report.analysis_id, result.score, report.submission.snippet());

        info!(
            "Analysis {} finished: {} ({}){}",
            report.analysis_id,
            report.assessment.severity_label,
            result.score,
            if recommendation.is_some() {
                ", sources recommended"
            } else {
                ""
            }
        );

        Ok(AnalysisOutput {
            report,
            recommendation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisParams;
    use crate::ports::key_value_store::testing::MockStore;
    use crate::ports::key_value_store::{CURRENT_ANALYSIS_KEY, resources_key};
    use crate::use_cases::shared::shared_random;
    use std::sync::Arc;
    use std::time::Duration;
    use veracity_domain::{Outcome, StdRandom};

    fn pipeline(store: Arc<MockStore>) -> RunAnalysisUseCase {
        let random = shared_random(StdRandom::seeded(11));
        RunAnalysisUseCase::new(
            ClassifySubmissionUseCase::new(store.clone(), random.clone()),
            AnalysisOrchestrator::new(AnalysisParams::default()),
            RecommendResourcesUseCase::new(store, random),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_trusted_url_gets_no_recommendation() {
        let store = Arc::new(MockStore::new());
        let output = pipeline(store.clone())
            .execute(Submission::url("https://www.nih.gov/health"))
            .await
            .unwrap();

        assert_eq!(output.report.result.outcome, Outcome::Acceptable);
        assert!(output.report.result.score >= 85);
        assert!(output.recommendation.is_none());
        assert!(store.raw(CURRENT_ANALYSIS_KEY).is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_questionable_text_gets_recommendation() {
        let store = Arc::new(MockStore::new());
        let output = pipeline(store.clone())
            .execute(Submission::text(
                "This miracle cure is what big pharma doesn't want you to see. Detox now!",
            ))
            .await
            .unwrap();

        assert_eq!(output.report.result.outcome, Outcome::Questionable);
        let recommendation = output.recommendation.expect("low score is recommended for");
        assert_eq!(recommendation.sources.len(), 3);
        assert_eq!(recommendation.analysis_id, output.report.analysis_id);
        assert!(
            store
                .raw(&resources_key(&output.report.analysis_id))
                .is_some()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_run_reports_cancellation() {
        let store = Arc::new(MockStore::new());
        let uc = Arc::new(pipeline(store));

        let running = {
            let uc = uc.clone();
            tokio::spawn(async move { uc.execute(Submission::text("hello")).await })
        };
        tokio::time::sleep(Duration::from_secs(1)).await;
        uc.orchestrator().cancel_current();

        let err = running.await.unwrap().unwrap_err();
        assert!(err.is_cancelled());
    }
}
