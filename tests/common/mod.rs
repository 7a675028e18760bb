//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use scam_shield::history::FileHistoryStore;

/// Temp directory holding a history file, plus a store pointed at it.
pub struct HistoryDir {
    temp_dir: TempDir,
}

impl HistoryDir {
    pub fn new() -> Self {
        Self { temp_dir: TempDir::new().expect("Failed to create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn history_file(&self) -> PathBuf {
        self.temp_dir.path().join("check_history.json")
    }

    pub fn store(&self) -> FileHistoryStore {
        FileHistoryStore::new(self.history_file())
    }

    /// Write a raw payload into the history file (e.g. corrupted JSON).
    pub fn with_raw_payload(self, payload: &str) -> Self {
        fs::write(self.history_file(), payload).expect("Failed to write history file");
        self
    }
}

/// Canonical mocked success body used across end-to-end tests.
pub fn scam_body() -> serde_json::Value {
    serde_json::json!({"label": "SCAM / FRAUD", "confidence": 0.97})
}

pub const PRINCE_TEXT: &str = "Dear Friend, I am Prince Abubakar...";
