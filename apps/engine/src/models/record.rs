//! Persisted analysis records.
//!
//! Wire format is camelCase JSON matching the historical store blob, so
//! history written by earlier versions still loads. Fields that later
//! versions added are `#[serde(default)]`; the analyzer's rehydration pass
//! reconstructs anything missing from the record's own inputs.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::taxonomy::SkillMap;

pub const UNKNOWN_COMPANY: &str = "Unknown Company";
pub const GENERAL_ROLE: &str = "General Role";

/// Per-skill confidence, toggled by the user. Two states only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillConfidence {
    #[default]
    Practice,
    Know,
}

impl SkillConfidence {
    pub fn toggled(self) -> Self {
        match self {
            SkillConfidence::Practice => SkillConfidence::Know,
            SkillConfidence::Know => SkillConfidence::Practice,
        }
    }
}

/// One entry of the 7-day plan. Two entries span two days each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDay {
    pub day: String,
    pub focus: String,
    pub tasks: Vec<String>,
}

/// One round of the preparation checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistRound {
    pub round_title: String,
    pub items: Vec<String>,
}

/// Company classification derived from name heuristics. Absent when the
/// submission carried no company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyIntel {
    pub name: String,
    pub industry: String,
    pub size: String,
    pub focus: String,
}

/// One predicted interview stage with its rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundStage {
    pub round_title: String,
    pub focus_areas: Vec<String>,
    pub why_it_matters: String,
}

/// One immutable analysis of a pasted job description.
///
/// After creation only `final_score`, `skill_confidence_map` and
/// `updated_at` ever change (via the skill toggle); `id` and `base_score`
/// are fixed for the record's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default = "timestamp_floor")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    pub jd_text: String,
    #[serde(default)]
    pub extracted_skills: SkillMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_intel: Option<CompanyIntel>,
    #[serde(default)]
    pub round_mapping: Vec<RoundStage>,
    #[serde(default)]
    pub plan7_days: Vec<PlanDay>,
    #[serde(default)]
    pub checklist: Vec<ChecklistRound>,
    #[serde(default)]
    pub questions: Vec<String>,
    /// Anchor for score recomputation; 0 only in legacy blobs that predate
    /// the field (real scores are always >= 35) and is rebuilt on load.
    #[serde(default)]
    pub base_score: u8,
    pub final_score: u8,
    #[serde(default)]
    pub skill_confidence_map: BTreeMap<String, SkillConfidence>,
}

fn timestamp_floor() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

impl AnalysisRecord {
    /// Company as shown in listings: the stored value or a fixed fallback.
    pub fn display_company(&self) -> &str {
        if self.company.trim().is_empty() {
            UNKNOWN_COMPANY
        } else {
            &self.company
        }
    }

    /// Role as shown in listings: the stored value or a fixed fallback.
    pub fn display_role(&self) -> &str {
        if self.role.trim().is_empty() {
            GENERAL_ROLE
        } else {
            &self.role
        }
    }
}
