//! JSONL file writer for analysis events.
//!
//! Each [`AnalysisEvent`] is serialized as a single JSON line with a
//! `type` field and `timestamp`, appended to the file via a buffered writer.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;
use veracity_application::{AnalysisEvent, AnalysisEventLogger};

/// JSONL analysis logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlAnalysisLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlAnalysisLogger {
    /// Create a logger appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create event log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open event log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Create a logger in `dir` with a per-day file name,
    /// `analysis-YYYY-MM-DD.jsonl`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Option<Self> {
        let name = format!("analysis-{}.jsonl", chrono::Utc::now().format("%Y-%m-%d"));
        Self::new(dir.as_ref().join(name))
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AnalysisEventLogger for JsonlAnalysisLogger {
    fn log(&self, event: AnalysisEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        // Merge payload with type + timestamp
        let record = if let serde_json::Value::Object(mut map) = event.payload {
            map.insert(
                "type".to_string(),
                serde_json::Value::String(event.event_type.to_string()),
            );
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(timestamp),
            );
            serde_json::Value::Object(map)
        } else {
            serde_json::json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "data": event.payload,
            })
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlAnalysisLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_object_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let logger = JsonlAnalysisLogger::new(&path).unwrap();

        logger.log(AnalysisEvent::new(
            "submission_classified",
            serde_json::json!({
                "analysis_id": "1700000000000",
                "score": 88,
                "outcome": "acceptable"
            }),
        ));
        logger.log(AnalysisEvent::new(
            "analysis_stage",
            serde_json::json!({ "stage": "analyzing" }),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        for value in &lines {
            assert!(value.get("type").is_some());
            assert!(value.get("timestamp").is_some());
        }
        assert_eq!(lines[0]["type"], "submission_classified");
        assert_eq!(lines[0]["score"], 88);
        assert_eq!(lines[1]["stage"], "analyzing");
    }

    #[test]
    fn test_non_object_payload_goes_under_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let logger = JsonlAnalysisLogger::new(&path).unwrap();

        logger.log(AnalysisEvent::new("note", serde_json::json!("just a string")));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["type"], "note");
        assert_eq!(lines[0]["data"], "just a string");
    }

    #[test]
    fn test_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let first = JsonlAnalysisLogger::in_dir(dir.path()).unwrap();
        let path = first.path().to_path_buf();
        first.log(AnalysisEvent::new("a", serde_json::json!({})));
        drop(first);

        let second = JsonlAnalysisLogger::new(&path).unwrap();
        second.log(AnalysisEvent::new("b", serde_json::json!({})));
        drop(second);

        assert!(path.file_name().unwrap().to_string_lossy().starts_with("analysis-"));
        assert_eq!(read_lines(&path).len(), 2);
    }
}
