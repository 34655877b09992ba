//! History persistence behind a trait seam.
//!
//! The store holds the entire analysis history as one ordered collection
//! (most recent first), read in full and written back in full. Per-entry
//! corruption never fails a load: invalid entries are dropped from the
//! working set and one aggregate warning is surfaced, never one per entry.

pub mod json_file;

use serde_json::Value;
use tracing::warn;

use crate::analysis::analyzer::rehydrate;
use crate::errors::EngineError;
use crate::models::record::AnalysisRecord;

pub use json_file::JsonFileStore;

/// Result of loading the history blob.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Valid records, most recent first.
    pub records: Vec<AnalysisRecord>,
    /// Entries dropped by validation (or 1 for an unreadable whole blob).
    pub dropped: usize,
}

impl LoadOutcome {
    pub fn corruption_warning(&self) -> Option<String> {
        (self.dropped > 0)
            .then(|| "Some saved entries couldn't be loaded. Create a new analysis.".to_string())
    }
}

/// Repository seam for the persisted history. Implementations load the
/// whole collection and overwrite it on save; there is no per-record I/O.
pub trait HistoryStore {
    fn load_all(&self) -> Result<LoadOutcome, EngineError>;
    fn save_all(&self, records: &[AnalysisRecord]) -> Result<(), EngineError>;
}

/// Validates and decodes raw blob entries, dropping anything that fails the
/// minimal schema or full deserialization, and rehydrating survivors.
pub(crate) fn decode_entries(raw: Vec<Value>) -> LoadOutcome {
    let mut records = Vec::new();
    let mut dropped = 0usize;

    for value in raw {
        if !passes_minimal_schema(&value) {
            dropped += 1;
            continue;
        }
        match serde_json::from_value::<AnalysisRecord>(value) {
            Ok(mut record) => {
                rehydrate(&mut record);
                records.push(record);
            }
            Err(_) => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!("{dropped} stored analysis entries failed validation and were dropped");
    }

    LoadOutcome { records, dropped }
}

/// Minimal schema every stored entry must satisfy:
/// non-empty `id`, non-empty `jdText`, numeric `finalScore`.
fn passes_minimal_schema(value: &Value) -> bool {
    let id_ok = value
        .get("id")
        .and_then(Value::as_str)
        .is_some_and(|id| !id.is_empty());
    let jd_ok = value
        .get("jdText")
        .and_then(Value::as_str)
        .is_some_and(|jd| !jd.is_empty());
    let score_ok = value.get("finalScore").map(Value::is_number).unwrap_or(false);
    id_ok && jd_ok && score_ok
}

/// In-memory store: ephemeral sessions and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: std::cell::RefCell<Vec<AnalysisRecord>>,
}

impl HistoryStore for MemoryStore {
    fn load_all(&self) -> Result<LoadOutcome, EngineError> {
        Ok(LoadOutcome {
            records: self.records.borrow().clone(),
            dropped: 0,
        })
    }

    fn save_all(&self, records: &[AnalysisRecord]) -> Result<(), EngineError> {
        *self.records.borrow_mut() = records.to_vec();
        Ok(())
    }
}
