use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Endpoint the original detector service serves on locally.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

const API_URL_VAR: &str = "AFF_API_URL";
const DATA_DIR_VAR: &str = "SCAM_SHIELD_DATA_DIR";

const HISTORY_FILENAME: &str = "check_history.json";

/// Base URL of the prediction service (`AFF_API_URL`, default local).
pub fn api_base_url() -> String {
    env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Location of the persisted check history: one fixed file name, under
/// `SCAM_SHIELD_DATA_DIR` when set, else the platform data directory.
pub fn history_file_path() -> Result<PathBuf> {
    if let Ok(dir) = env::var(DATA_DIR_VAR) {
        return Ok(PathBuf::from(dir).join(HISTORY_FILENAME));
    }
    let data_base = dirs::data_dir().context("Failed to get platform data directory")?;
    Ok(data_base.join("scam-shield").join(HISTORY_FILENAME))
}
