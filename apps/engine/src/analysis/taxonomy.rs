//! Skill taxonomy: the fixed category set and per-category keyword tables.
//!
//! The catch-all [`SkillCategory::General`] is a real variant rather than a
//! magic map key, so every consumer is forced to handle it explicitly. Its
//! "keywords" are not matched against JD text; they are the fallback
//! competencies used when no real category hits.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Extraction output keyed by category. `Ord` on the enum follows declaration
/// order, so iterating the map yields taxonomy order with `General` last.
pub type SkillMap = BTreeMap<SkillCategory, Vec<String>>;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
pub enum SkillCategory {
    #[serde(rename = "Core CS")]
    CoreCs,
    Languages,
    Web,
    Data,
    #[serde(rename = "Cloud/DevOps")]
    CloudDevops,
    Testing,
    General,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::CoreCs => "Core CS",
            SkillCategory::Languages => "Languages",
            SkillCategory::Web => "Web",
            SkillCategory::Data => "Data",
            SkillCategory::CloudDevops => "Cloud/DevOps",
            SkillCategory::Testing => "Testing",
            SkillCategory::General => "General",
        }
    }

    /// Keyword list for this category, in match/output order.
    /// For `General` this is the fallback competency set.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            SkillCategory::CoreCs => &["DSA", "OOP", "DBMS", "OS", "Networks"],
            SkillCategory::Languages => &[
                "Java",
                "Python",
                "JavaScript",
                "TypeScript",
                "C",
                "C++",
                "C#",
                "Go",
            ],
            SkillCategory::Web => &["React", "Next.js", "Node.js", "Express", "REST", "GraphQL"],
            SkillCategory::Data => &["SQL", "MongoDB", "PostgreSQL", "MySQL", "Redis"],
            SkillCategory::CloudDevops => &[
                "AWS",
                "Azure",
                "GCP",
                "Docker",
                "Kubernetes",
                "CI/CD",
                "Linux",
            ],
            SkillCategory::Testing => &["Selenium", "Cypress", "Playwright", "JUnit", "PyTest"],
            SkillCategory::General => &["Programming Fundamentals", "Problem Solving"],
        }
    }

    /// Whether this category counts as core computer science for interview
    /// round mapping (enterprise technical rounds focus on these).
    pub fn is_core_cs(&self) -> bool {
        matches!(self, SkillCategory::CoreCs | SkillCategory::Languages)
    }
}
