//! JSONL debate transcripts.
//!
//! One line per [`ConversationEvent`]: the payload's fields plus `type` and
//! an RFC 3339 `timestamp`. Non-object payloads are nested under `data`.

use super::timestamp_suffix;
use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};
use std::fs::{self, File, OpenOptions};
use std::io::{self, LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use symposium_application::{ConversationEvent, ConversationLogger};
use tracing::warn;

/// [`ConversationLogger`] appending to a `.jsonl` file
pub struct JsonlConversationLogger {
    file: Mutex<LineWriter<File>>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open `path` for appending, creating missing parent directories.
    pub fn create(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            file: Mutex::new(LineWriter::new(file)),
            path,
        })
    }

    /// New `debate_<YYYYmmdd_HHMMSS>.jsonl` inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> io::Result<Self> {
        Self::create(
            dir.as_ref()
                .join(format!("debate_{}.jsonl", timestamp_suffix())),
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, record: &Value) -> io::Result<()> {
        let line = serde_json::to_string(record)?;
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(file, "{line}")
    }
}

fn to_record(event: ConversationEvent, timestamp: String) -> Value {
    let mut record = match event.payload {
        Value::Object(fields) => fields,
        data => Map::from_iter([("data".to_string(), data)]),
    };
    record.insert("type".to_string(), event.event_type.into());
    record.insert("timestamp".to_string(), timestamp.into());
    Value::Object(record)
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let event_type = event.event_type;

        if let Err(e) = self.append(&to_record(event, timestamp)) {
            warn!(
                "Dropped {} record for {}: {}",
                event_type,
                self.path.display(),
                e
            );
        }
    }
}
