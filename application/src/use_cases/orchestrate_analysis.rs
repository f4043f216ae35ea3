//! Analysis orchestration use case.
//!
//! Drives an [`AnalysisSession`] through its stages on three timers (stage,
//! progress, elapsed seconds) owned by a single driver task:
//!
//! ```text
//! start ──► processing ──► analyzing ──► verifying ──► complete
//!   │        (3s)           (4s)          (3s)           │
//!   │   progress tick every 200ms, elapsed tick every 1s │
//!   └──────────── snapshots on a watch channel ──────────┘
//! ```
//!
//! Cancelling the handle, dropping it, or starting the next analysis on the
//! same orchestrator stops all three timers at once.

use crate::config::AnalysisParams;
use crate::ports::event_logger::{AnalysisEvent, AnalysisEventLogger, NoEventLogger};
use crate::ports::progress::{AnalysisProgressNotifier, NoProgress};
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use veracity_domain::{
    AnalysisSession, AnalysisSnapshot, AnalysisStage, ClassificationResult, StageSchedule,
    Submission,
};

/// Errors that can occur while waiting for an analysis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Analysis was cancelled")]
    Cancelled,

    #[error("Analysis aborted: {0}")]
    Aborted(String),
}

/// Starts analysis sessions. At most one session per orchestrator is live.
pub struct AnalysisOrchestrator {
    schedule: StageSchedule,
    notifier: Arc<dyn AnalysisProgressNotifier>,
    event_logger: Arc<dyn AnalysisEventLogger>,
    current: Mutex<Option<CancellationToken>>,
}

impl AnalysisOrchestrator {
    pub fn new(params: AnalysisParams) -> Self {
        Self {
            schedule: params.schedule(),
            notifier: Arc::new(NoProgress),
            event_logger: Arc::new(NoEventLogger),
            current: Mutex::new(None),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn AnalysisProgressNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_event_logger(mut self, logger: Arc<dyn AnalysisEventLogger>) -> Self {
        self.event_logger = logger;
        self
    }

    /// Base schedule, before complexity scaling.
    pub fn schedule(&self) -> &StageSchedule {
        &self.schedule
    }

    /// Start a session for an already classified submission.
    ///
    /// Cancels the previous session first. Must be called inside a Tokio
    /// runtime.
    pub fn start(&self, submission: Submission, result: ClassificationResult) -> AnalysisHandle {
        let token = CancellationToken::new();
        {
            let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(previous) = current.replace(token.clone()) {
                debug!("Cancelling previous analysis");
                previous.cancel();
            }
        }

        let schedule = self.schedule.scaled(result.processing_complexity());
        let session = AnalysisSession::new(submission, result);
        let id = session.id().to_string();
        info!(
            "Starting analysis {} ({:.1}s total)",
            id,
            schedule.total().as_secs_f64()
        );

        let (tx, rx) = watch::channel(session.snapshot());
        let driver = Driver {
            session,
            schedule,
            snapshots: tx,
            notifier: self.notifier.clone(),
            event_logger: self.event_logger.clone(),
        };
        let task = tokio::spawn(driver.run(token.clone()));

        AnalysisHandle {
            id,
            token,
            snapshots: rx,
            task: Some(task),
        }
    }

    /// Cancel the live session, if any.
    pub fn cancel_current(&self) {
        let current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(token) = current.as_ref() {
            token.cancel();
        }
    }
}

/// Handle to a running analysis. Dropping it cancels the analysis.
pub struct AnalysisHandle {
    id: String,
    token: CancellationToken,
    snapshots: watch::Receiver<AnalysisSnapshot>,
    task: Option<JoinHandle<Result<ClassificationResult, AnalysisError>>>,
}

impl AnalysisHandle {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Latest published state.
    pub fn snapshot(&self) -> AnalysisSnapshot {
        *self.snapshots.borrow()
    }

    /// Receiver that observes every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<AnalysisSnapshot> {
        self.snapshots.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait for `Complete` and return the result computed at intake.
    pub async fn wait(mut self) -> Result<ClassificationResult, AnalysisError> {
        let task = self
            .task
            .take()
            .ok_or_else(|| AnalysisError::Aborted("analysis already awaited".to_string()))?;
        match task.await {
            Ok(outcome) => outcome,
            Err(e) => Err(AnalysisError::Aborted(e.to_string())),
        }
    }
}

impl Drop for AnalysisHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

// ==================== Driver ====================

struct Driver {
    session: AnalysisSession,
    schedule: StageSchedule,
    snapshots: watch::Sender<AnalysisSnapshot>,
    notifier: Arc<dyn AnalysisProgressNotifier>,
    event_logger: Arc<dyn AnalysisEventLogger>,
}

impl Driver {
    async fn run(mut self, token: CancellationToken) -> Result<ClassificationResult, AnalysisError> {
        let start = Instant::now();
        let mut progress = interval_at(
            start + self.schedule.progress_tick,
            self.schedule.progress_tick,
        );
        let mut elapsed = interval_at(
            start + self.schedule.elapsed_tick,
            self.schedule.elapsed_tick,
        );
        let mut stage_deadline = start + self.schedule.processing;
        let stage_timer = sleep_until(stage_deadline);
        tokio::pin!(stage_timer);

        self.enter_stage(self.session.stage());

        loop {
            tokio::select! {
                biased;

                _ = token.cancelled() => {
                    self.session.cancel();
                    info!("Analysis {} cancelled at {}", self.session.id(), self.session.stage());
                    self.notifier.on_cancelled();
                    return Err(AnalysisError::Cancelled);
                }

                _ = elapsed.tick() => {
                    if self.session.on_elapsed_tick() {
                        self.publish();
                    }
                }

                _ = &mut stage_timer => {
                    let Some(stage) = self.session.advance_stage() else {
                        break;
                    };
                    self.enter_stage(stage);
                    self.publish();
                    match self.schedule.dwell(stage) {
                        Some(dwell) => {
                            stage_deadline += dwell;
                            stage_timer.as_mut().reset(stage_deadline);
                        }
                        None => break,
                    }
                }

                _ = progress.tick() => {
                    if self.session.on_progress_tick() {
                        self.publish();
                    }
                }
            }
        }

        let id = self.session.id().to_string();
        let elapsed_seconds = self.session.elapsed_seconds();
        let result = self.session.into_result().ok_or_else(|| {
            AnalysisError::Aborted(format!("analysis {} stopped before completing", id))
        })?;

        info!("Analysis {} complete: score {}", id, result.score);
        self.notifier.on_complete(&result);
        self.event_logger.log(AnalysisEvent::new(
            "analysis_complete",
            serde_json::json!({
                "analysis_id": id,
                "score": result.score,
                "outcome": result.outcome.as_str(),
                "elapsed_seconds": elapsed_seconds,
            }),
        ));
        Ok(result)
    }

    fn enter_stage(&self, stage: AnalysisStage) {
        debug!("Analysis {} entered {}", self.session.id(), stage);
        self.notifier.on_stage_change(stage);
        self.event_logger.log(AnalysisEvent::new(
            "analysis_stage",
            serde_json::json!({
                "analysis_id": self.session.id(),
                "stage": stage.as_str(),
                "progress": self.session.progress(),
            }),
        ));
    }

    fn publish(&self) {
        let snapshot = self.session.snapshot();
        self.snapshots.send_replace(snapshot);
        self.notifier.on_progress(&snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::event_logger::testing::RecordingEventLogger;
    use std::time::Duration;
    use veracity_domain::{FileMeta, SequenceRandom, classify};

    #[derive(Default)]
    struct RecordingNotifier {
        stages: Mutex<Vec<AnalysisStage>>,
        snapshots: Mutex<Vec<AnalysisSnapshot>>,
        completed: Mutex<bool>,
        cancelled: Mutex<bool>,
    }

    impl AnalysisProgressNotifier for RecordingNotifier {
        fn on_stage_change(&self, stage: AnalysisStage) {
            self.stages.lock().unwrap().push(stage);
        }

        fn on_progress(&self, snapshot: &AnalysisSnapshot) {
            self.snapshots.lock().unwrap().push(*snapshot);
        }

        fn on_complete(&self, _result: &ClassificationResult) {
            *self.completed.lock().unwrap() = true;
        }

        fn on_cancelled(&self) {
            *self.cancelled.lock().unwrap() = true;
        }
    }

    fn classified(submission: &Submission) -> ClassificationResult {
        classify(submission, &mut SequenceRandom::zeros())
    }

    fn text_submission() -> Submission {
        Submission::text("Eat more vegetables")
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_all_stages_in_order() {
        let notifier = Arc::new(RecordingNotifier::default());
        let orchestrator =
            AnalysisOrchestrator::new(AnalysisParams::default()).with_notifier(notifier.clone());

        let submission = text_submission();
        let result = classified(&submission);
        let started = Instant::now();
        let handle = orchestrator.start(submission, result.clone());
        let rx = handle.subscribe();

        let finished = handle.wait().await.unwrap();
        assert_eq!(finished, result);
        assert!(started.elapsed() >= Duration::from_secs(10));
        assert!(started.elapsed() < Duration::from_secs(11));

        assert_eq!(
            *notifier.stages.lock().unwrap(),
            AnalysisStage::SEQUENCE.to_vec()
        );
        assert!(*notifier.completed.lock().unwrap());
        assert!(!*notifier.cancelled.lock().unwrap());

        let last = *rx.borrow();
        assert_eq!(last.stage, AnalysisStage::Complete);
        assert_eq!(last.progress, 100);
        assert!(last.elapsed_seconds >= 9);
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress_is_monotone_and_respects_ceilings() {
        let notifier = Arc::new(RecordingNotifier::default());
        let orchestrator =
            AnalysisOrchestrator::new(AnalysisParams::default()).with_notifier(notifier.clone());

        let submission = text_submission();
        let result = classified(&submission);
        orchestrator.start(submission, result).wait().await.unwrap();

        let snapshots = notifier.snapshots.lock().unwrap();
        assert!(!snapshots.is_empty());
        for pair in snapshots.windows(2) {
            assert!(pair[1].progress >= pair[0].progress);
            assert!(pair[1].elapsed_seconds >= pair[0].elapsed_seconds);
        }
        for snapshot in snapshots.iter() {
            assert!(snapshot.progress <= snapshot.stage.progress_ceiling());
        }
        // Each stage's ceiling is reached before it ends.
        for stage in [
            AnalysisStage::Processing,
            AnalysisStage::Analyzing,
            AnalysisStage::Verifying,
        ] {
            assert!(
                snapshots
                    .iter()
                    .any(|s| s.stage == stage && s.progress == stage.progress_ceiling()),
                "{} never reached its ceiling",
                stage
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_mutation() {
        let notifier = Arc::new(RecordingNotifier::default());
        let orchestrator =
            AnalysisOrchestrator::new(AnalysisParams::default()).with_notifier(notifier.clone());

        let submission = text_submission();
        let result = classified(&submission);
        let handle = orchestrator.start(submission, result);
        let rx = handle.subscribe();

        tokio::time::sleep(Duration::from_millis(2100)).await;
        handle.cancel();
        assert_eq!(handle.wait().await, Err(AnalysisError::Cancelled));

        let frozen = *rx.borrow();
        assert_eq!(frozen.stage, AnalysisStage::Processing);

        tokio::time::sleep(Duration::from_secs(20)).await;
        assert_eq!(*rx.borrow(), frozen);
        assert!(*notifier.cancelled.lock().unwrap());
        assert!(!*notifier.completed.lock().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_submission_cancels_previous() {
        let orchestrator = AnalysisOrchestrator::new(AnalysisParams::default());

        let first = text_submission();
        let first_result = classified(&first);
        let first_handle = orchestrator.start(first, first_result);

        tokio::time::sleep(Duration::from_secs(1)).await;

        let second = Submission::url("https://www.who.int/news");
        let second_result = classified(&second);
        let second_handle = orchestrator.start(second, second_result.clone());

        assert!(first_handle.is_cancelled());
        assert_eq!(first_handle.wait().await, Err(AnalysisError::Cancelled));
        assert_eq!(second_handle.wait().await, Ok(second_result));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_cancels() {
        let notifier = Arc::new(RecordingNotifier::default());
        let orchestrator =
            AnalysisOrchestrator::new(AnalysisParams::default()).with_notifier(notifier.clone());

        let submission = text_submission();
        let result = classified(&submission);
        drop(orchestrator.start(submission, result));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(*notifier.cancelled.lock().unwrap());
        assert_eq!(*notifier.stages.lock().unwrap(), vec![AnalysisStage::Processing]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_high_complexity_doubles_duration() {
        let orchestrator = AnalysisOrchestrator::new(AnalysisParams::default());

        let submission = Submission::file(FileMeta::new("clip.mp4", "video/mp4", 1_000_000));
        let result = classified(&submission);
        let started = Instant::now();
        orchestrator.start(submission, result).wait().await.unwrap();

        assert!(started.elapsed() >= Duration::from_secs(20));
        assert!(started.elapsed() < Duration::from_secs(21));
    }

    #[tokio::test(start_paused = true)]
    async fn test_logs_stage_and_complete_events() {
        let logger = Arc::new(RecordingEventLogger::default());
        let orchestrator = AnalysisOrchestrator::new(
            AnalysisParams::default().with_stage_durations(100, 100, 100),
        )
        .with_event_logger(logger.clone());

        let submission = text_submission();
        let result = classified(&submission);
        orchestrator.start(submission, result).wait().await.unwrap();

        let types = logger.event_types();
        assert_eq!(
            types,
            vec![
                "analysis_stage",
                "analysis_stage",
                "analysis_stage",
                "analysis_stage",
                "analysis_complete"
            ]
        );
        let stages: Vec<_> = logger
            .payloads("analysis_stage")
            .iter()
            .map(|p| p["stage"].as_str().unwrap_or_default().to_string())
            .collect();
        assert_eq!(stages, vec!["processing", "analyzing", "verifying", "complete"]);
    }
}
