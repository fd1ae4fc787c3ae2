//! JSONL file writer for session events.
//!
//! Each [`SessionEvent`] becomes one JSON line tagged with its kind and an
//! RFC3339 timestamp. Logging never fails the quiz: I/O errors are
//! swallowed after a warning at construction time.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;
use tracing::warn;
use viktorina_application::{SessionEvent, SessionLogger};

/// Append-only JSONL session log, thread-safe via a buffered writer
/// behind a mutex.
pub struct JsonlSessionLogger {
    writer: Mutex<BufWriter<File>>,
}

impl JsonlSessionLogger {
    /// Create a logger writing to `path`, creating parent directories as
    /// needed. Returns `None` (with a warning) if the file cannot be
    /// created.
    pub fn create(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Could not create session log directory {}: {}", parent.display(), e);
            return None;
        }

        match File::create(path) {
            Ok(file) => Some(Self {
                writer: Mutex::new(BufWriter::new(file)),
            }),
            Err(e) => {
                warn!("Could not create session log {}: {}", path.display(), e);
                None
            }
        }
    }
}

impl SessionLogger for JsonlSessionLogger {
    fn log(&self, event: SessionEvent) {
        let record = serde_json::json!({
            "type": event.kind,
            "timestamp": chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            "data": event.payload,
        });

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_one_json_object_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.jsonl");
        let logger = JsonlSessionLogger::create(&path).unwrap();

        logger.log(SessionEvent::new(
            "prompt_sent",
            serde_json::json!({"topic": "Физика", "grade": 9}),
        ));
        logger.log(SessionEvent::new(
            "result_received",
            serde_json::json!({"bytes": 1024}),
        ));

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "prompt_sent");
        assert_eq!(first["data"]["grade"], 9);
        assert!(first["timestamp"].is_string());
    }

    #[test]
    fn test_unwritable_path_returns_none() {
        assert!(JsonlSessionLogger::create("/dev/null/impossible/x.jsonl").is_none());
    }
}
