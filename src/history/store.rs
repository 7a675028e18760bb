use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Utc;
use uuid::Uuid;

use crate::models::{HistoryItem, Label};

/// Maximum number of checks kept; appending past this evicts the oldest.
pub const HISTORY_CAPACITY: usize = 20;

/// Storage interface for the check history, newest-first.
///
/// Kept small so the persistence backend is swappable without touching the
/// session controller. All operations are infallible — see the module docs
/// for the degradation policy.
pub trait HistoryStore: Send + Sync {
    /// All stored checks, newest-first, re-read from storage on every call.
    fn list(&self) -> Vec<HistoryItem>;

    /// Record one successful check. Assigns a fresh id and timestamp,
    /// prepends, truncates to [`HISTORY_CAPACITY`], and persists.
    ///
    /// Returns `None` when the write had to be dropped.
    fn append(&self, text: &str, label: Label, confidence: f64) -> Option<HistoryItem>;

    /// Remove all stored history. Idempotent.
    fn clear(&self);
}

/// File-backed store: the whole log is one JSON array in a single file.
///
/// Newest-first order is by insertion (prepend), never re-sorted by
/// timestamp — two entries created in the same millisecond keep their
/// insertion order. Writes go through a temp file + rename so a crash never
/// leaves a half-written log, and a mutex serializes the read-modify-write
/// since callers may sit on a multi-threaded runtime.
#[derive(Debug)]
pub struct FileHistoryStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    /// Store at the platform default location (see
    /// [`crate::utils::history_file_path`]).
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(crate::utils::history_file_path()?))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_log(&self) -> Vec<HistoryItem> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "could not read history, treating as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "history payload corrupted, treating as empty");
                Vec::new()
            }
        }
    }

    fn write_log(&self, items: &[HistoryItem]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string(items)?;
        // Temp file + rename keeps the log readable at every instant.
        let temp = self.path.with_extension("json.tmp");
        fs::write(&temp, payload)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

impl HistoryStore for FileHistoryStore {
    fn list(&self) -> Vec<HistoryItem> {
        self.read_log()
    }

    fn append(&self, text: &str, label: Label, confidence: f64) -> Option<HistoryItem> {
        let _guard = self.lock.lock().ok()?;

        let item = HistoryItem {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            label,
            confidence,
            timestamp: Utc::now().timestamp_millis(),
        };

        let mut log = self.read_log();
        log.insert(0, item.clone());
        log.truncate(HISTORY_CAPACITY);

        if let Err(e) = self.write_log(&log) {
            tracing::warn!(path = %self.path.display(), error = %e, "dropping history write");
            return None;
        }
        Some(item)
    }

    fn clear(&self) {
        let _guard = match self.lock.lock() {
            Ok(guard) => guard,
            Err(_) => return,
        };
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "could not clear history");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, FileHistoryStore) {
        let dir = TempDir::new().unwrap();
        let store = FileHistoryStore::new(dir.path().join("check_history.json"));
        (dir, store)
    }

    #[test]
    fn absent_file_lists_empty() {
        let (_dir, store) = temp_store();
        assert!(store.list().is_empty());
    }

    #[test]
    fn corrupted_payload_lists_empty() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "{{not json").unwrap();
        assert!(store.list().is_empty());
    }

    #[test]
    fn append_prepends_newest_first() {
        let (_dir, store) = temp_store();
        store.append("first", Label::Legitimate, 0.6).unwrap();
        store.append("second", Label::ScamFraud, 0.9).unwrap();

        let log = store.list();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].text, "second");
        assert_eq!(log[1].text, "first");
    }

    #[test]
    fn creates_parent_directories_on_first_write() {
        let dir = TempDir::new().unwrap();
        let store = FileHistoryStore::new(dir.path().join("nested/deeper/check_history.json"));
        assert!(store.append("hello", Label::Legitimate, 0.5).is_some());
        assert_eq!(store.list().len(), 1);
    }
}
