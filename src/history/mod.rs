//! Bounded, persisted log of past checks
//!
//! # Error Handling Strategy
//!
//! History is a best-effort convenience feature, never a correctness-critical
//! store, so persistence failures must never block the analyze flow:
//!
//! - **Read failures**: a missing file is simply an empty log; a corrupted
//!   payload is logged as a warning and also read as empty.
//! - **Write failures**: dropped silently (with a warning) — the check result
//!   the user just received is unaffected.
//!
//! The trait signatures are infallible on purpose: the degrade-to-empty
//! policy lives in the type, not in unhandled errors, so tests can assert on
//! it directly.

pub mod store;

pub use store::{FileHistoryStore, HistoryStore, HISTORY_CAPACITY};
