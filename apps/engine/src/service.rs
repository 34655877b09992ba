//! Submission and history facade over the analysis pipeline and the store.
//!
//! The whole history is loaded once at construction, mutated in memory, and
//! written back in full after every change: single client, last writer
//! wins, no locking. All operations are synchronous.

use std::sync::Arc;

use tracing::{info, warn};

use crate::analysis::analyzer::analyze;
use crate::analysis::scoring::recompute_final_score;
use crate::clock::{Clock, SystemClock};
use crate::errors::EngineError;
use crate::export::render_export;
use crate::models::record::AnalysisRecord;
use crate::store::HistoryStore;

/// JDs shorter than this (trimmed) get one soft warning before analysis.
const SHORT_JD_CHARS: usize = 200;

const SHORT_JD_WARNING: &str = "This JD is too short to analyze deeply. Paste full JD for better output. Submit again to proceed anyway.";

/// Outcome of a submission attempt that passed hard validation.
#[derive(Debug, Clone)]
pub enum Submission {
    Created(AnalysisRecord),
    /// Soft warning: no record was created; an identical resubmission will
    /// go through.
    NeedsConfirmation { warning: String },
}

pub struct ReadinessService<S: HistoryStore> {
    store: S,
    clock: Arc<dyn Clock>,
    /// Working set, most recent first.
    history: Vec<AnalysisRecord>,
    /// Trimmed JD text the short-length warning was already issued for.
    /// Cleared on success; editing the text re-arms the warning.
    short_warned: Option<String>,
    load_warning: Option<String>,
}

impl<S: HistoryStore> ReadinessService<S> {
    pub fn new(store: S) -> Result<Self, EngineError> {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: S, clock: Arc<dyn Clock>) -> Result<Self, EngineError> {
        let outcome = store.load_all()?;
        let load_warning = outcome.corruption_warning();
        info!(
            "Loaded {} analyses from history ({} dropped)",
            outcome.records.len(),
            outcome.dropped
        );
        Ok(Self {
            store,
            clock,
            history: outcome.records,
            short_warned: None,
            load_warning,
        })
    }

    /// Aggregate corruption warning from the initial load, surfaced once.
    pub fn take_load_warning(&mut self) -> Option<String> {
        self.load_warning.take()
    }

    /// All analyses, most recent first.
    pub fn history(&self) -> &[AnalysisRecord] {
        &self.history
    }

    /// Analyzes a submission and persists the resulting record.
    ///
    /// An empty JD is a hard validation error. A JD under 200 characters is
    /// refused once with a soft warning; resubmitting the identical text is
    /// the "proceed anyway" gesture and succeeds. The override is one-shot:
    /// it does not survive the submission, and editing the text re-arms the
    /// warning.
    pub fn submit(
        &mut self,
        company: &str,
        role: &str,
        jd_text: &str,
    ) -> Result<Submission, EngineError> {
        let trimmed = jd_text.trim();
        if trimmed.is_empty() {
            return Err(EngineError::Validation(
                "Please paste a job description to analyze.".to_string(),
            ));
        }

        if trimmed.chars().count() < SHORT_JD_CHARS
            && self.short_warned.as_deref() != Some(trimmed)
        {
            warn!("Short JD submitted ({} chars), warning once", trimmed.chars().count());
            self.short_warned = Some(trimmed.to_string());
            return Ok(Submission::NeedsConfirmation {
                warning: SHORT_JD_WARNING.to_string(),
            });
        }
        self.short_warned = None;

        let record = analyze(company, role, jd_text, self.clock.as_ref())?;
        self.history.insert(0, record.clone());
        self.store.save_all(&self.history)?;
        info!("Saved analysis {} ({} total)", record.id, self.history.len());
        Ok(Submission::Created(record))
    }

    /// Resolves a record for display: the requested id when it exists, the
    /// most recent record when it does not, `None` when there is no history
    /// at all (the "no analysis yet" state).
    pub fn find_record(&self, id: Option<&str>) -> Option<&AnalysisRecord> {
        match id {
            Some(id) => self
                .history
                .iter()
                .find(|record| record.id == id)
                .or_else(|| self.history.first()),
            None => self.history.first(),
        }
    }

    /// Flips one skill between practice and know, recomputes the current
    /// score from the base score, and persists.
    pub fn toggle_skill(
        &mut self,
        record_id: &str,
        skill: &str,
    ) -> Result<&AnalysisRecord, EngineError> {
        let position = self
            .history
            .iter()
            .position(|record| record.id == record_id)
            .ok_or_else(|| EngineError::NotFound(format!("analysis {record_id}")))?;

        let record = &mut self.history[position];
        let state = record.skill_confidence_map.get_mut(skill).ok_or_else(|| {
            EngineError::Validation(format!("'{skill}' is not part of this analysis"))
        })?;
        *state = state.toggled();

        record.final_score =
            recompute_final_score(record.base_score, &record.skill_confidence_map);
        record.updated_at = self.clock.now();
        info!(
            "Toggled '{skill}' on {record_id}, score now {}",
            record.final_score
        );

        self.store.save_all(&self.history)?;
        Ok(&self.history[position])
    }

    /// Plain-text export of the resolved record (same fallback rules as
    /// [`find_record`]).
    pub fn export_text(&self, id: Option<&str>) -> Result<String, EngineError> {
        self.find_record(id)
            .map(render_export)
            .ok_or_else(|| EngineError::NotFound("no analysis available yet".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::testing::FixedClock;
    use crate::models::record::SkillConfidence;
    use crate::store::MemoryStore;

    fn service() -> ReadinessService<MemoryStore> {
        ReadinessService::with_clock(
            MemoryStore::default(),
            Arc::new(FixedClock::at_epoch_day()),
        )
        .unwrap()
    }

    fn long_jd(stack: &str) -> String {
        format!(
            "{stack}. {}",
            "lorem ipsum dolor sit amet consectetur adipiscing elit ".repeat(4)
        )
    }

    fn created(submission: Submission) -> AnalysisRecord {
        match submission {
            Submission::Created(record) => record,
            Submission::NeedsConfirmation { warning } => {
                panic!("expected a created record, got warning: {warning}")
            }
        }
    }

    #[test]
    fn test_empty_jd_is_a_hard_validation_error() {
        let mut service = service();
        let err = service.submit("", "", "   ").unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
        assert!(service.history().is_empty());
    }

    #[test]
    fn test_scenario_c_short_jd_warns_once_then_identical_resubmit_succeeds() {
        let mut service = service();
        let short = "React engineer wanted, remote.";

        let first = service.submit("", "", short).unwrap();
        assert!(matches!(first, Submission::NeedsConfirmation { .. }));
        assert!(service.history().is_empty());

        let second = service.submit("", "", short).unwrap();
        let record = created(second);
        assert_eq!(service.history().len(), 1);
        assert_eq!(service.history()[0].id, record.id);
    }

    #[test]
    fn test_short_jd_override_is_one_shot() {
        let mut service = service();
        let short = "React engineer wanted, remote.";

        service.submit("", "", short).unwrap();
        created(service.submit("", "", short).unwrap());

        // The override was consumed: the same short text warns again.
        let third = service.submit("", "", short).unwrap();
        assert!(matches!(third, Submission::NeedsConfirmation { .. }));
    }

    #[test]
    fn test_editing_short_jd_rearms_the_warning() {
        let mut service = service();
        service.submit("", "", "React engineer wanted.").unwrap();

        let edited = service.submit("", "", "SQL engineer wanted.").unwrap();
        assert!(matches!(edited, Submission::NeedsConfirmation { .. }));
    }

    #[test]
    fn test_long_jd_needs_no_confirmation() {
        let mut service = service();
        let record = created(service.submit("Acme", "SDE", &long_jd("React")).unwrap());
        assert!(record.base_score >= 35);
        assert_eq!(service.history().len(), 1);
    }

    #[test]
    fn test_history_is_most_recent_first_and_persisted() {
        let store = MemoryStore::default();
        {
            let mut service = ReadinessService::with_clock(
                store,
                Arc::new(FixedClock::at_epoch_day()),
            )
            .unwrap();
            created(service.submit("", "", &long_jd("React")).unwrap());
            created(service.submit("", "", &long_jd("SQL")).unwrap());
            assert_eq!(service.history()[0].id, "analysis-1");
            assert_eq!(service.history()[1].id, "analysis-0");
        }
    }

    #[test]
    fn test_reload_from_store_preserves_history() {
        let store = MemoryStore::default();
        let mut service =
            ReadinessService::with_clock(store, Arc::new(FixedClock::at_epoch_day())).unwrap();
        created(service.submit("", "", &long_jd("React")).unwrap());

        let ReadinessService { store, .. } = service;
        let reloaded =
            ReadinessService::with_clock(store, Arc::new(FixedClock::at_epoch_day())).unwrap();
        assert_eq!(reloaded.history().len(), 1);
    }

    #[test]
    fn test_find_record_falls_back_to_most_recent() {
        let mut service = service();
        created(service.submit("", "", &long_jd("React")).unwrap());
        let newest = created(service.submit("", "", &long_jd("SQL")).unwrap());

        assert_eq!(service.find_record(Some("analysis-0")).unwrap().id, "analysis-0");
        assert_eq!(service.find_record(Some("missing")).unwrap().id, newest.id);
        assert_eq!(service.find_record(None).unwrap().id, newest.id);
    }

    #[test]
    fn test_find_record_on_empty_history_is_none() {
        let service = service();
        assert!(service.find_record(Some("anything")).is_none());
        assert!(service.find_record(None).is_none());
    }

    #[test]
    fn test_toggle_flips_state_and_recomputes_from_base() {
        let mut service = service();
        let record = created(service.submit("", "", &long_jd("React and SQL")).unwrap());
        let base = record.base_score;

        let toggled = service.toggle_skill(&record.id, "React").unwrap();
        assert_eq!(
            toggled.skill_confidence_map.get("React"),
            Some(&SkillConfidence::Know)
        );
        assert_eq!(toggled.final_score, base + 2);

        let toggled = service.toggle_skill(&record.id, "SQL").unwrap();
        assert_eq!(toggled.final_score, base + 4);
    }

    #[test]
    fn test_toggle_pair_is_idempotent() {
        let mut service = service();
        let record = created(service.submit("", "", &long_jd("React and SQL")).unwrap());
        // Another skill already known, as in the recomputation scenario.
        service.toggle_skill(&record.id, "SQL").unwrap();
        let before = service.find_record(Some(&record.id)).unwrap().clone();

        service.toggle_skill(&record.id, "React").unwrap();
        let after_pair = service.toggle_skill(&record.id, "React").unwrap();

        assert_eq!(after_pair.final_score, before.final_score);
        assert_eq!(after_pair.skill_confidence_map, before.skill_confidence_map);
    }

    #[test]
    fn test_toggle_recomputes_from_scratch_not_incrementally() {
        // base 60, one other skill already known: stored final drifted to 60,
        // but every toggle recomputes from the full confidence map.
        let json = serde_json::json!([{
            "id": "seeded",
            "createdAt": "2024-01-10T08:00:00Z",
            "jdText": "React and SQL position",
            "baseScore": 60,
            "finalScore": 60,
            "skillConfidenceMap": { "SQL": "know" }
        }]);
        let store = MemoryStore::default();
        let seeded = crate::store::decode_entries(match json {
            serde_json::Value::Array(entries) => entries,
            _ => unreachable!(),
        });
        store.save_all(&seeded.records).unwrap();

        let mut service =
            ReadinessService::with_clock(store, Arc::new(FixedClock::at_epoch_day())).unwrap();
        // Rehydration already repaired the drift: 60 + 2 for the known SQL.
        assert_eq!(service.history()[0].final_score, 62);

        let first = service.toggle_skill("seeded", "React").unwrap().final_score;
        let second = service.toggle_skill("seeded", "React").unwrap().final_score;
        assert_eq!((first, second), (64, 62));
    }

    #[test]
    fn test_toggle_base_score_never_changes() {
        let mut service = service();
        let record = created(service.submit("", "", &long_jd("React")).unwrap());
        let base = record.base_score;
        service.toggle_skill(&record.id, "React").unwrap();
        assert_eq!(service.history()[0].base_score, base);
    }

    #[test]
    fn test_toggle_refreshes_updated_at() {
        let store = MemoryStore::default();
        let clock = Arc::new(FixedClock::at_epoch_day());
        let mut service = ReadinessService::with_clock(store, clock).unwrap();
        let record = created(service.submit("", "", &long_jd("React")).unwrap());

        let toggled = service.toggle_skill(&record.id, "React").unwrap();
        assert!(toggled.updated_at >= toggled.created_at);
    }

    #[test]
    fn test_toggle_unknown_skill_is_rejected() {
        let mut service = service();
        let record = created(service.submit("", "", &long_jd("React")).unwrap());
        let err = service.toggle_skill(&record.id, "Cobol").unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn test_toggle_missing_record_is_not_found() {
        let mut service = service();
        let err = service.toggle_skill("missing", "React").unwrap_err();
        assert!(matches!(err, EngineError::NotFound(_)));
    }

    #[test]
    fn test_export_uses_fallback_resolution() {
        let mut service = service();
        created(service.submit("", "", &long_jd("React")).unwrap());
        let text = service.export_text(Some("missing")).unwrap();
        assert!(text.contains("7-Day Preparation Plan"));
    }

    #[test]
    fn test_export_on_empty_history_is_not_found() {
        let service = service();
        assert!(matches!(
            service.export_text(None),
            Err(EngineError::NotFound(_))
        ));
    }

    #[test]
    fn test_load_warning_surfaces_once() {
        let store = MemoryStore::default();
        let mut service =
            ReadinessService::with_clock(store, Arc::new(FixedClock::at_epoch_day())).unwrap();
        assert!(service.take_load_warning().is_none());
        assert!(service.take_load_warning().is_none());
    }
}
