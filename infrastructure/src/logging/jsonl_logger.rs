//! JSONL file writer for generation events.
//!
//! Each [`GenerationEvent`] becomes one JSON line carrying its payload plus
//! `type`, `timestamp` and the `run` it belongs to. Lines are appended, so
//! one file can collect the events of many runs.

use dossier_application::{GenerationEvent, GenerationLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL generation logger that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every event and on `Drop`.
pub struct JsonlGenerationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
    run_id: String,
}

impl JsonlGenerationLogger {
    /// Open (or create) the log at `path` for appending.
    ///
    /// Returns `None` when the file or its parent directory cannot be created;
    /// generation then proceeds without an event log.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
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
                warn!("Could not open event log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
            run_id: chrono::Utc::now().format("%Y%m%dT%H%M%S%.3fZ").to_string(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Identifier stamped on every line written by this logger
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    fn record(&self, event: GenerationEvent) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut map = match event.payload {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::from(event.event_type));
        map.insert("timestamp".to_string(), Value::from(timestamp));
        map.insert("run".to_string(), Value::from(self.run_id.as_str()));
        Value::Object(map)
    }
}

impl GenerationLogger for JsonlGenerationLogger {
    fn log(&self, event: GenerationEvent) {
        let Ok(line) = serde_json::to_string(&self.record(event)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlGenerationLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
