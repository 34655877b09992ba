//! Keyword matcher: boundary-safe, case-insensitive keyword extraction.
//!
//! A keyword hits when it is not adjacent to another word character on either
//! side. This generalizes `\b`, which fails on keywords ending in non-word
//! characters ("C++", "C#", "Node.js"): `\bC\+\+\b` can never match because
//! there is no word boundary after '+'.

use std::sync::LazyLock;

use regex::Regex;
use strum::IntoEnumIterator;

use crate::analysis::taxonomy::{SkillCategory, SkillMap};

/// One compiled pattern per taxonomy keyword, grouped by category.
/// `General` is excluded: its entries are fallback competencies, not keywords.
static CATEGORY_PATTERNS: LazyLock<Vec<(SkillCategory, Vec<(&'static str, Regex)>)>> =
    LazyLock::new(|| {
        SkillCategory::iter()
            .filter(|category| *category != SkillCategory::General)
            .map(|category| {
                let compiled = category
                    .keywords()
                    .iter()
                    .map(|keyword| (*keyword, keyword_pattern(keyword)))
                    .collect();
                (category, compiled)
            })
            .collect()
    });

fn keyword_pattern(keyword: &str) -> Regex {
    Regex::new(&format!(
        "(?i)(^|[^A-Za-z0-9_]){}([^A-Za-z0-9_]|$)",
        regex::escape(keyword)
    ))
    .expect("taxonomy keyword patterns are statically valid")
}

/// Extraction result: the complete category map plus the count of real
/// categories that matched at least one keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillExtraction {
    pub skills: SkillMap,
    pub category_count: usize,
}

/// Extracts matched keywords per category from raw JD text.
///
/// Every category key is always present (possibly empty) so downstream
/// consumers never need to probe for missing keys. When no real category
/// matches, `General` is populated with the fallback competencies and
/// `category_count` stays 0.
pub fn extract_skills(jd_text: &str) -> SkillExtraction {
    let mut skills: SkillMap = SkillCategory::iter().map(|c| (c, Vec::new())).collect();
    let mut category_count = 0;

    for (category, patterns) in CATEGORY_PATTERNS.iter() {
        let found: Vec<String> = patterns
            .iter()
            .filter(|(_, pattern)| pattern.is_match(jd_text))
            .map(|(keyword, _)| keyword.to_string())
            .collect();
        if !found.is_empty() {
            category_count += 1;
        }
        skills.insert(*category, found);
    }

    if category_count == 0 {
        skills.insert(
            SkillCategory::General,
            SkillCategory::General
                .keywords()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
    }

    SkillExtraction {
        skills,
        category_count,
    }
}

/// Whether the category matched any of the given keywords (case-insensitive).
pub fn category_has_any(skills: &SkillMap, category: SkillCategory, names: &[&str]) -> bool {
    skills
        .get(&category)
        .map(|found| {
            found
                .iter()
                .any(|skill| names.iter().any(|name| skill.eq_ignore_ascii_case(name)))
        })
        .unwrap_or(false)
}

/// Whether the category matched at least one keyword. Always false for
/// `General`, which only ever carries fallback competencies.
pub fn category_matched(skills: &SkillMap, category: SkillCategory) -> bool {
    category != SkillCategory::General
        && skills.get(&category).map(|f| !f.is_empty()).unwrap_or(false)
}

/// Count of real categories with at least one hit. Used when re-deriving
/// score state for records loaded from an older blob.
pub fn matched_category_count(skills: &SkillMap) -> usize {
    SkillCategory::iter()
        .filter(|category| category_matched(skills, *category))
        .count()
}
