//! Data models for the scam-shield client.
//!
//! This module defines the data structures shared across the crate:
//!
//! - [`Label`] / [`CheckResult`] - Classification outcome from the prediction service
//! - [`HealthStatus`] - Liveness probe response
//! - [`HistoryItem`] - One persisted past check
//!
//! These models use serde and mirror the wire format of the remote AFF
//! detector API exactly (label strings, `model_loaded` field name).

pub mod check;
pub mod history;

pub use check::{CheckResult, HealthStatus, Label};
pub use history::HistoryItem;
