//! scam-shield - Client core for the advance-fee-fraud (AFF) detector
//!
//! This library mediates between user input, a remote classification service,
//! and a bounded local history of past checks. It provides:
//!
//! - A prediction client wrapping `POST /predict` and `GET /health`, with
//!   transport/protocol failures normalized into a typed error taxonomy
//! - A persisted, capacity-bounded, newest-first history of past checks
//! - A session controller running one analyze cycle at a time
//!
//! # Example
//!
//! ```no_run
//! use scam_shield::client::PredictionClient;
//! use scam_shield::history::FileHistoryStore;
//! use scam_shield::session::SessionController;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = PredictionClient::from_env()?;
//! let store = FileHistoryStore::from_env()?;
//! let mut session = SessionController::new(client, store);
//! session.submit("Dear Friend, I am Prince Abubakar...").await;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod history;
pub mod models;
pub mod samples;
pub mod session;
pub mod utils;

// Re-export commonly used types
pub use client::{ClassifiedError, Classifier, PredictionClient};
pub use history::{FileHistoryStore, HistoryStore, HISTORY_CAPACITY};
pub use models::{CheckResult, HealthStatus, HistoryItem, Label};
pub use session::{SessionController, SessionState, SubmitOutcome};
