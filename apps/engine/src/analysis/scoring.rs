//! Readiness scoring: the fixed additive base-score heuristic and the
//! confidence-driven recomputation of the current score.

use std::collections::BTreeMap;

use crate::models::record::SkillConfidence;

pub const MAX_SCORE: u8 = 100;

const BASE_POINTS: u32 = 35;
const POINTS_PER_CATEGORY: u32 = 5;
const CATEGORY_POINTS_CAP: u32 = 30;
const COMPANY_POINTS: u32 = 10;
const ROLE_POINTS: u32 = 10;
const LONG_JD_POINTS: u32 = 10;
const LONG_JD_CHARS: usize = 800;

/// Points added per skill the user marks as known.
const KNOWN_SKILL_POINTS: u32 = 2;

/// Base readiness score. Pure and deterministic: identical inputs always
/// yield the identical score.
///
/// base 35, plus 5 per matched category capped at 30, plus 10 each for a
/// non-blank company, a non-blank role, and a JD longer than 800 characters.
pub fn compute_base_score(company: &str, role: &str, jd_text: &str, category_count: usize) -> u8 {
    let mut score = BASE_POINTS + (POINTS_PER_CATEGORY * category_count as u32).min(CATEGORY_POINTS_CAP);
    if !company.trim().is_empty() {
        score += COMPANY_POINTS;
    }
    if !role.trim().is_empty() {
        score += ROLE_POINTS;
    }
    if jd_text.chars().count() > LONG_JD_CHARS {
        score += LONG_JD_POINTS;
    }
    score.min(MAX_SCORE as u32) as u8
}

/// Current score derived from the immutable base score and the confidence
/// map: base plus 2 per skill currently marked known, clamped to 100.
///
/// Recomputed from scratch on every toggle rather than adjusted
/// incrementally, so the result is independent of toggle order and cannot
/// drift under repeated operations.
pub fn recompute_final_score(
    base_score: u8,
    confidence: &BTreeMap<String, SkillConfidence>,
) -> u8 {
    let known = confidence
        .values()
        .filter(|state| **state == SkillConfidence::Know)
        .count() as u32;
    (base_score as u32 + KNOWN_SKILL_POINTS * known).min(MAX_SCORE as u32) as u8
}
