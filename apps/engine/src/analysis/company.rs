//! Company intel and interview round mapping, derived from company-name
//! heuristics plus the detected skill categories. Both are absent when the
//! submission carried no company name.

use crate::analysis::matcher::category_matched;
use crate::analysis::taxonomy::{SkillCategory, SkillMap};
use crate::models::record::{CompanyIntel, RoundStage};
use strum::IntoEnumIterator;

/// Lowercased substrings that mark a company as a well-known large
/// organization. Anything else is treated as a startup.
const ENTERPRISE_NAMES: &[&str] = &[
    "google",
    "microsoft",
    "amazon",
    "meta",
    "facebook",
    "apple",
    "netflix",
    "adobe",
    "oracle",
    "ibm",
    "intel",
    "cisco",
    "sap",
    "salesforce",
    "tcs",
    "infosys",
    "wipro",
    "accenture",
    "cognizant",
    "capgemini",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyClass {
    Enterprise,
    Startup,
}

pub fn classify_company(name: &str) -> CompanyClass {
    let lowered = name.to_lowercase();
    if ENTERPRISE_NAMES.iter().any(|known| lowered.contains(known)) {
        CompanyClass::Enterprise
    } else {
        CompanyClass::Startup
    }
}

/// Builds intel for a non-blank company name; `None` otherwise.
pub fn build_company_intel(company: &str, skills: &SkillMap) -> Option<CompanyIntel> {
    let name = company.trim();
    if name.is_empty() {
        return None;
    }

    let detected = detected_category_names(skills);
    let focus = if detected.is_empty() {
        "General software engineering".to_string()
    } else {
        detected
            .iter()
            .take(2)
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    };

    let intel = match classify_company(name) {
        CompanyClass::Enterprise => CompanyIntel {
            name: name.to_string(),
            industry: "IT Services & Consulting".to_string(),
            size: "Enterprise (2000+)".to_string(),
            focus,
        },
        CompanyClass::Startup => CompanyIntel {
            name: name.to_string(),
            industry: "Product / SaaS".to_string(),
            size: "Startup (10-500)".to_string(),
            focus,
        },
    };
    Some(intel)
}

/// Builds the predicted interview stages for a non-blank company name;
/// an empty list otherwise (no intel means no round mapping).
pub fn build_round_mapping(company: &str, skills: &SkillMap) -> Vec<RoundStage> {
    if company.trim().is_empty() {
        return Vec::new();
    }
    match classify_company(company) {
        CompanyClass::Enterprise => enterprise_rounds(skills),
        CompanyClass::Startup => startup_rounds(skills),
    }
}

fn enterprise_rounds(skills: &SkillMap) -> Vec<RoundStage> {
    let mut core_focus: Vec<String> = SkillCategory::iter()
        .filter(|category| category.is_core_cs() && category_matched(skills, *category))
        .map(|category| category.as_str().to_string())
        .collect();
    if core_focus.is_empty() {
        core_focus.push("CS fundamentals".to_string());
    }

    vec![
        RoundStage {
            round_title: "Round 1: Online Assessment".to_string(),
            focus_areas: vec![
                "Quantitative Aptitude".to_string(),
                "Logical Reasoning".to_string(),
            ],
            why_it_matters: "High-volume screens cut most applicants before a human ever reads the resume."
                .to_string(),
        },
        RoundStage {
            round_title: "Round 2: DSA + Core CS".to_string(),
            focus_areas: core_focus,
            why_it_matters: "Large panels benchmark every candidate against the same fundamentals bar."
                .to_string(),
        },
        RoundStage {
            round_title: "Round 3: Technical Interview".to_string(),
            focus_areas: vec![
                "Resume Projects".to_string(),
                "Applied problem solving".to_string(),
            ],
            why_it_matters: "Interviewers probe whether listed skills survive follow-up questions."
                .to_string(),
        },
        RoundStage {
            round_title: "Round 4: Managerial + HR".to_string(),
            focus_areas: vec![
                "Behavioral scenarios".to_string(),
                "Company research".to_string(),
            ],
            why_it_matters: "Enterprise offers stall on communication and culture fit, not just code."
                .to_string(),
        },
    ]
}

fn startup_rounds(skills: &SkillMap) -> Vec<RoundStage> {
    // First detected category outside the core-CS bucket.
    let deep_dive = SkillCategory::iter()
        .filter(|category| !category.is_core_cs() && *category != SkillCategory::General)
        .find(|category| category_matched(skills, *category))
        .map(|category| category.as_str().to_string())
        .unwrap_or_else(|| "Your project stack".to_string());

    vec![
        RoundStage {
            round_title: "Round 1: Practical Coding".to_string(),
            focus_areas: vec!["Hands-on implementation".to_string()],
            why_it_matters: "Small teams hire people who can ship working code quickly.".to_string(),
        },
        RoundStage {
            round_title: "Round 2: Stack Deep-Dive".to_string(),
            focus_areas: vec![deep_dive],
            why_it_matters: "Startups need immediate contribution on the exact stack already in production."
                .to_string(),
        },
        RoundStage {
            round_title: "Round 3: Founder / Culture Fit".to_string(),
            focus_areas: vec![
                "Ownership".to_string(),
                "Working with ambiguity".to_string(),
            ],
            why_it_matters: "Founders look for self-direction and comfort with loosely specified problems."
                .to_string(),
        },
    ]
}

fn detected_category_names(skills: &SkillMap) -> Vec<&'static str> {
    SkillCategory::iter()
        .filter(|category| category_matched(skills, *category))
        .map(|category| category.as_str())
        .collect()
}
