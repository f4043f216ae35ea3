//! Progress reporting for the analysis timeline

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use veracity_application::AnalysisProgressNotifier;
use veracity_domain::{AnalysisSnapshot, AnalysisStage, ClassificationResult};

/// Reports progress with a single 0-100 bar
pub struct ProgressReporter {
    bar: ProgressBar,
    last_stage: Mutex<Option<AnalysisStage>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let bar = ProgressBar::new(100);
        bar.set_style(Self::bar_style());
        Self {
            bar,
            last_stage: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos:>3}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    pub(crate) fn stage_label(stage: AnalysisStage) -> String {
        format!("{:<21}", stage.display_name())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisProgressNotifier for ProgressReporter {
    fn on_stage_change(&self, stage: AnalysisStage) {
        if let Ok(mut last) = self.last_stage.lock() {
            *last = Some(stage);
        }
        self.bar.set_prefix(Self::stage_label(stage));
    }

    fn on_progress(&self, snapshot: &AnalysisSnapshot) {
        self.bar.set_position(u64::from(snapshot.progress));
        self.bar.set_message(format!("{}s", snapshot.elapsed_seconds));
    }

    fn on_complete(&self, _result: &ClassificationResult) {
        self.bar.set_position(100);
        self.bar
            .finish_with_message(format!("{}", "Analysis complete".green()));
    }

    fn on_cancelled(&self) {
        let stage = self
            .last_stage
            .lock()
            .ok()
            .and_then(|s| *s)
            .map(|s| s.as_str())
            .unwrap_or("start");
        self.bar
            .abandon_with_message(format!("{} during {}", "Cancelled".red(), stage));
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl AnalysisProgressNotifier for SimpleProgress {
    fn on_stage_change(&self, stage: AnalysisStage) {
        if stage.is_terminal() {
            return;
        }
        eprintln!("{} {}", "->".cyan(), stage.display_name().bold());
    }

    fn on_progress(&self, _snapshot: &AnalysisSnapshot) {}

    fn on_complete(&self, result: &ClassificationResult) {
        eprintln!("  {} score {}", "v".green(), result.score);
    }

    fn on_cancelled(&self) {
        eprintln!("  {} cancelled", "x".red());
    }
}
