//! Placement-readiness analysis engine.
//!
//! Rule-based analysis of pasted job descriptions: extracts known skill
//! keywords against a fixed taxonomy, derives a 0-100 readiness score,
//! generates a 7-day plan, a round-wise checklist, likely interview
//! questions and a company-heuristic round mapping, and keeps the analysis
//! history in a whole-blob repository (a JSON file by default). Everything
//! is synchronous and deterministic; the embedding UI supplies rendering,
//! clipboard and navigation.

pub mod analysis;
pub mod clock;
pub mod config;
pub mod errors;
pub mod export;
pub mod models;
pub mod service;
pub mod store;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use crate::analysis::analyzer::analyze;
pub use crate::clock::{Clock, SystemClock};
pub use crate::config::Config;
pub use crate::errors::EngineError;
pub use crate::export::render_export;
pub use crate::models::record::AnalysisRecord;
pub use crate::service::{ReadinessService, Submission};
pub use crate::store::{HistoryStore, JsonFileStore, MemoryStore};

/// Initializes structured logging for an embedding application.
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing(config: &Config) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .ok();
}
