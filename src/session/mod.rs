//! Per-interaction session state machine
//!
//! One analyze cycle: validate input, call the prediction client, record the
//! outcome into the history store, land in `Result` or `Failed`. Selecting a
//! stored check replays it without touching the network.

pub mod controller;

pub use controller::{SessionController, SessionFailure, SessionState, SubmitOutcome};
