//! Command-line interface for the scam-shield client

pub mod commands;

pub use commands::{run, Cli, Commands};
