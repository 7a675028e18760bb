use serde::{Deserialize, Serialize};

use super::check::{CheckResult, Label};

/// One persisted past check.
///
/// Created by the history store at successful-prediction time and never
/// mutated afterwards; removed only by a full [`crate::history::HistoryStore::clear`].
/// The `text` field holds the submitted message unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: String,
    pub text: String,
    pub label: Label,
    pub confidence: f64,
    /// Epoch milliseconds at creation time.
    pub timestamp: i64,
}

impl HistoryItem {
    /// The stored classification, replayed without touching the network.
    pub fn result(&self) -> CheckResult {
        CheckResult { label: self.label, confidence: self.confidence }
    }
}
