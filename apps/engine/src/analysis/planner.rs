//! Plan and checklist generation: fixed templates adjusted by detected
//! skills. Skill hits append tasks to the base template; they never replace
//! base tasks, so the plan always carries its foundation work.

use crate::analysis::matcher::{category_has_any, category_matched};
use crate::analysis::taxonomy::{SkillCategory, SkillMap};
use crate::models::record::{ChecklistRound, PlanDay};

pub const PLAN_LEN: usize = 5;
pub const CHECKLIST_LEN: usize = 4;

const WEB_FRAMEWORKS: &[&str] = &["React", "Next.js"];
const SQL_FAMILY: &[&str] = &["SQL", "MySQL", "PostgreSQL"];

/// Base 5-entry template covering the 7-day span (two multi-day entries).
fn plan_template() -> Vec<PlanDay> {
    let entries: [(&str, &str, &str); PLAN_LEN] = [
        (
            "Day 1-2",
            "Basics & Foundation",
            "Review core CS fundamentals and brush up on language logic.",
        ),
        (
            "Day 3-4",
            "Core & Algorithms",
            "Solve 10-15 medium level coding questions focusing on recent patterns.",
        ),
        (
            "Day 5",
            "Project Architecture",
            "Update resume with relevant detected keywords. Review personal projects.",
        ),
        (
            "Day 6",
            "Mock Interviews",
            "Practice behavioral and tech questions extracted from requirements.",
        ),
        (
            "Day 7",
            "Revision & Polish",
            "Final tech stack revision and rest.",
        ),
    ];
    entries
        .into_iter()
        .map(|(day, focus, task)| PlanDay {
            day: day.to_string(),
            focus: focus.to_string(),
            tasks: vec![task.to_string()],
        })
        .collect()
}

/// Builds the 7-day plan, appending skill-specific tasks per detected
/// category. Always exactly 5 entries.
pub fn build_plan(skills: &SkillMap, category_count: usize) -> Vec<PlanDay> {
    let mut plan = plan_template();

    if category_has_any(skills, SkillCategory::Web, WEB_FRAMEWORKS) {
        plan[0].tasks.push(
            "Revise React Component Lifecycle, Hooks (useState, useEffect), and Context API setups."
                .to_string(),
        );
        plan[2].tasks.push(
            "Ensure your portfolio explicitly highlights state management and responsive UI components."
                .to_string(),
        );
    }
    if category_has_any(skills, SkillCategory::Data, SQL_FAMILY) {
        plan[1].tasks.push(
            "Practice writing complex SQL Joins, Window Functions, and understand Indexing limits."
                .to_string(),
        );
    }
    if category_matched(skills, SkillCategory::CloudDevops) {
        plan[3].tasks.push(
            "Include mock questions on deployment strategies, Docker containerization, and basic CI/CD pipelining."
                .to_string(),
        );
    }
    // Python takes priority; the Java/C# branch only fires without it.
    if category_has_any(skills, SkillCategory::Languages, &["Python"]) {
        plan[0].tasks.push(
            "Review Python memory management, list comprehensions, generators, and OOP paradigms."
                .to_string(),
        );
    } else if category_has_any(skills, SkillCategory::Languages, &["Java", "C#"]) {
        plan[0].tasks.push(
            "Review Collections, Multithreading syntax, Garbage Collection, and deep OOP foundations."
                .to_string(),
        );
    }
    if category_count == 0 {
        plan[0].tasks.push(
            "Build project fundamentals: pick one small app and implement it end to end."
                .to_string(),
        );
    }

    plan
}

/// Builds the 4-round checklist. Round 3 leads with resume-project depth,
/// then either the first matched category's skills or two generic items.
pub fn build_checklist(skills: &SkillMap, category_count: usize) -> Vec<ChecklistRound> {
    let mut tech_items = vec!["Deep dive into Resume Projects".to_string()];
    if category_count > 0 {
        // First non-empty real category in taxonomy order.
        let top = skills
            .iter()
            .find(|(category, found)| **category != SkillCategory::General && !found.is_empty());
        if let Some((_, found)) = top {
            tech_items.push(format!("Discuss {} implementation details", found.join(", ")));
        }
    } else {
        tech_items.push("Explain core technologies used in projects".to_string());
        tech_items.push("Walk through one project end to end".to_string());
    }

    vec![
        ChecklistRound {
            round_title: "Round 1: Aptitude / Basics".to_string(),
            items: vec![
                "Quantitative Aptitude (Time/Work, Probability)".to_string(),
                "Logical Reasoning".to_string(),
                "Language Fundamentals".to_string(),
            ],
        },
        ChecklistRound {
            round_title: "Round 2: DSA + Core CS".to_string(),
            items: vec![
                "Arrays & Strings".to_string(),
                "Trees & Graphs".to_string(),
                "DBMS Normalization".to_string(),
                "OS Scheduling".to_string(),
            ],
        },
        ChecklistRound {
            round_title: "Round 3: Tech interview (projects + stack)".to_string(),
            items: tech_items,
        },
        ChecklistRound {
            round_title: "Round 4: Managerial / HR".to_string(),
            items: vec![
                "Behavioral Scenarios (STAR method)".to_string(),
                "Company Research".to_string(),
                "Questions for the interviewer".to_string(),
            ],
        },
    ]
}
