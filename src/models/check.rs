use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification label as returned by the remote model.
///
/// Serialized with the exact wire strings the service uses, so the same type
/// works for API responses and the persisted history log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "SCAM / FRAUD")]
    ScamFraud,
    #[serde(rename = "LEGITIMATE")]
    Legitimate,
}

impl Label {
    pub fn is_scam(&self) -> bool {
        matches!(self, Label::ScamFraud)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::ScamFraud => write!(f, "SCAM / FRAUD"),
            Label::Legitimate => write!(f, "LEGITIMATE"),
        }
    }
}

/// Outcome of one classification. Produced by the prediction service or
/// replayed verbatim from a stored [`super::HistoryItem`]; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub label: Label,
    pub confidence: f64,
}

/// Response of the `/health` liveness probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub model_loaded: bool,
}
