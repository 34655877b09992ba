use std::path::PathBuf;

use anyhow::Result;

/// Engine configuration loaded from environment variables.
/// Every variable has a default; an embedding UI can run with no .env at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON history blob (the local-storage analog).
    pub history_path: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            history_path: std::env::var("JD_HISTORY_PATH")
                .unwrap_or_else(|_| "jd_history.json".to_string())
                .into(),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
