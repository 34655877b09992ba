//! Analysis pipeline: validates input, runs extraction, scoring and
//! generation, and assembles one immutable record.
//!
//! Flow: extract_skills → compute_base_score → plan/checklist/questions →
//!       company intel + round mapping → record assembly.
//!
//! `rehydrate` replays the same pure derivations over records loaded from
//! older blobs, so missing derived fields are reconstructed on read instead
//! of mutating stored history in place.

use std::collections::BTreeMap;

use tracing::info;

use crate::analysis::company::{build_company_intel, build_round_mapping};
use crate::analysis::matcher::{extract_skills, matched_category_count};
use crate::analysis::planner::{build_checklist, build_plan};
use crate::analysis::questions::build_questions;
use crate::analysis::scoring::{compute_base_score, recompute_final_score};
use crate::analysis::taxonomy::{SkillCategory, SkillMap};
use crate::clock::Clock;
use crate::errors::EngineError;
use crate::models::record::{AnalysisRecord, SkillConfidence};
use strum::IntoEnumIterator;

/// Runs the full analysis pipeline over one submission.
///
/// The job description must be non-blank; company and role may be empty
/// (they only affect scoring, intel and display fallbacks).
pub fn analyze(
    company: &str,
    role: &str,
    jd_text: &str,
    clock: &dyn Clock,
) -> Result<AnalysisRecord, EngineError> {
    if jd_text.trim().is_empty() {
        return Err(EngineError::Validation(
            "Please paste a job description to analyze.".to_string(),
        ));
    }

    let extraction = extract_skills(jd_text);
    info!(
        "Extracted skills across {} matched categories",
        extraction.category_count
    );

    let base_score = compute_base_score(company, role, jd_text, extraction.category_count);
    let plan7_days = build_plan(&extraction.skills, extraction.category_count);
    let checklist = build_checklist(&extraction.skills, extraction.category_count);
    let questions = build_questions(&extraction.skills, extraction.category_count);
    let company_intel = build_company_intel(company, &extraction.skills);
    let round_mapping = build_round_mapping(company, &extraction.skills);
    let skill_confidence_map = default_confidence(&extraction.skills);

    let now = clock.now();
    let record = AnalysisRecord {
        id: clock.new_record_id(),
        created_at: now,
        updated_at: now,
        company: company.trim().to_string(),
        role: role.trim().to_string(),
        jd_text: jd_text.to_string(),
        extracted_skills: extraction.skills,
        company_intel,
        round_mapping,
        plan7_days,
        checklist,
        questions,
        base_score,
        final_score: base_score,
        skill_confidence_map,
    };

    info!(
        "Assembled analysis {} (base score {})",
        record.id, record.base_score
    );
    Ok(record)
}

/// Reconstructs derived fields a loaded record is missing, using the same
/// derivation functions as creation. Also repairs invariants a hand-edited
/// or legacy blob can violate (incomplete category keys, confidence entries
/// for skills the record never matched, stale final score).
pub fn rehydrate(record: &mut AnalysisRecord) {
    if record.updated_at < record.created_at {
        record.updated_at = record.created_at;
    }

    let keys_complete = SkillCategory::iter().all(|c| record.extracted_skills.contains_key(&c));
    if !keys_complete {
        record.extracted_skills = extract_skills(&record.jd_text).skills;
    }
    let category_count = matched_category_count(&record.extracted_skills);

    if record.base_score == 0 {
        record.base_score =
            compute_base_score(&record.company, &record.role, &record.jd_text, category_count);
    }

    record.skill_confidence_map = rebuilt_confidence(
        &record.extracted_skills,
        &record.skill_confidence_map,
    );

    if record.plan7_days.is_empty() {
        record.plan7_days = build_plan(&record.extracted_skills, category_count);
    }
    if record.checklist.is_empty() {
        record.checklist = build_checklist(&record.extracted_skills, category_count);
    }
    if record.questions.is_empty() {
        record.questions = build_questions(&record.extracted_skills, category_count);
    }
    if record.company_intel.is_none() {
        record.company_intel = build_company_intel(&record.company, &record.extracted_skills);
    }
    if record.round_mapping.is_empty() {
        record.round_mapping = build_round_mapping(&record.company, &record.extracted_skills);
    }

    record.final_score = recompute_final_score(record.base_score, &record.skill_confidence_map);
}

fn default_confidence(skills: &SkillMap) -> BTreeMap<String, SkillConfidence> {
    skills
        .values()
        .flatten()
        .map(|skill| (skill.clone(), SkillConfidence::default()))
        .collect()
}

fn rebuilt_confidence(
    skills: &SkillMap,
    stored: &BTreeMap<String, SkillConfidence>,
) -> BTreeMap<String, SkillConfidence> {
    skills
        .values()
        .flatten()
        .map(|skill| {
            let state = stored.get(skill).copied().unwrap_or_default();
            (skill.clone(), state)
        })
        .collect()
}
