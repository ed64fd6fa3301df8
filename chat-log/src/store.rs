//! Log store trait and the JSONL file implementation.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::errors::LogError;
use crate::record::ChatLogRecord;

/// Append-only sink for chat transaction records.
#[async_trait]
pub trait ChatLogStore: Send + Sync {
    /// Appends one record. Implementations must not reorder or rewrite
    /// previously appended rows.
    async fn append(&self, record: &ChatLogRecord) -> Result<(), LogError>;
}

/// JSONL-backed log store: one serialized record per line.
pub struct JsonlChatLog {
    path: PathBuf,
}

impl JsonlChatLog {
    /// Creates the store, making sure the parent directory exists.
    ///
    /// # Errors
    /// Returns [`LogError::Io`] when the parent directory cannot be
    /// created.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, LogError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { path })
    }
}

#[async_trait]
impl ChatLogStore for JsonlChatLog {
    async fn append(&self, record: &ChatLogRecord) -> Result<(), LogError> {
        let row = serde_json::to_string(record)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{row}")?;

        debug!("appended chat log row for session {}", record.session_id);
        Ok(())
    }
}
