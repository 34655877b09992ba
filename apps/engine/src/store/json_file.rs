//! File-backed history store: one JSON array, read and written whole.
//! The direct analog of the original browser local-storage blob.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use tracing::{info, warn};

use crate::config::Config;
use crate::errors::EngineError;
use crate::models::record::AnalysisRecord;
use crate::store::{decode_entries, HistoryStore, LoadOutcome};

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.history_path.clone())
    }
}

impl HistoryStore for JsonFileStore {
    fn load_all(&self) -> Result<LoadOutcome, EngineError> {
        if !self.path.exists() {
            info!("No history file at {}, starting empty", self.path.display());
            return Ok(LoadOutcome::default());
        }

        let raw = fs::read_to_string(&self.path)?;
        let entries: Vec<Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                // A blob we cannot parse at all still must not fail the
                // load; the user just starts with empty history.
                warn!(
                    "History blob at {} is unreadable ({err}), starting empty",
                    self.path.display()
                );
                return Ok(LoadOutcome {
                    records: Vec::new(),
                    dropped: 1,
                });
            }
        };

        Ok(decode_entries(entries))
    }

    fn save_all(&self, records: &[AnalysisRecord]) -> Result<(), EngineError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let blob = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, blob)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::analyze;
    use crate::clock::testing::FixedClock;

    fn store_in(dir: &tempfile::TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("jd_history.json"))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = store_in(&dir).load_all().unwrap();
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.dropped, 0);
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let clock = FixedClock::at_epoch_day();

        let older = analyze("Acme", "SDE", "React role", &clock).unwrap();
        let newer = analyze("Acme", "SDE", "SQL role", &clock).unwrap();
        store.save_all(&[newer.clone(), older.clone()]).unwrap();

        let outcome = store.load_all().unwrap();
        assert_eq!(outcome.dropped, 0);
        let ids: Vec<&str> = outcome.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec![newer.id.as_str(), older.id.as_str()]);
    }

    #[test]
    fn test_unreadable_blob_loads_empty_with_warning_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jd_history.json");
        fs::write(&path, "definitely not json").unwrap();

        let outcome = JsonFileStore::new(path).load_all().unwrap();
        assert!(outcome.records.is_empty());
        assert!(outcome.corruption_warning().is_some());
    }

    #[test]
    fn test_one_corrupt_entry_does_not_take_down_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jd_history.json");
        let blob = serde_json::json!([
            {
                "id": "good",
                "createdAt": "2024-05-18T03:20:00Z",
                "jdText": "React role",
                "finalScore": 55
            },
            { "id": "bad", "finalScore": 55 }
        ]);
        fs::write(&path, serde_json::to_string(&blob).unwrap()).unwrap();

        let outcome = JsonFileStore::new(path).load_all().unwrap();
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].id, "good");
        assert_eq!(outcome.dropped, 1);
    }

    #[test]
    fn test_save_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/deeper/history.json"));
        store.save_all(&[]).unwrap();
        assert!(store.load_all().unwrap().records.is_empty());
    }
}
