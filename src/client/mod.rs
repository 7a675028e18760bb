//! HTTP client for the remote AFF prediction service
//!
//! # Error Handling Strategy
//!
//! Every transport or protocol failure is normalized into one
//! [`ClassifiedError`] variant before it leaves this module:
//!
//! - **4xx responses**: user-correctable; the service's `detail` body field is
//!   surfaced verbatim when present, else a generic message with the status.
//! - **5xx responses**: transient server failures; the user is told to retry.
//! - **Transport failures** (connect/DNS, no response obtained): mapped to
//!   `NetworkUnreachable` by matching reqwest's own failure signature, never
//!   by status code.
//! - **Everything else** (malformed success body, protocol surprises): `Unknown`.
//!
//! Exactly one network call per `predict` invocation — no caching, no retry,
//! no partial state left behind on failure.

pub mod error;
pub mod prediction;

pub use error::ClassifiedError;
pub use prediction::{Classifier, PredictionClient};
