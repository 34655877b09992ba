//! Likely-question generation: skill-mapped questions first, in a fixed
//! priority order, topped up from a generic pool.

use crate::analysis::matcher::{category_has_any, category_matched};
use crate::analysis::taxonomy::{SkillCategory, SkillMap};

pub const MAX_QUESTIONS: usize = 10;

const SQL_FAMILY: &[&str] = &["SQL", "MySQL", "PostgreSQL"];
const NOSQL_FAMILY: &[&str] = &["MongoDB", "Redis"];
const WEB_FRAMEWORKS: &[&str] = &["React", "Next.js"];
const NODE_STACK: &[&str] = &["Node.js", "Express"];
const JS_FAMILY: &[&str] = &["JavaScript", "TypeScript"];

/// Behavioral/technical pool used to top the list up to 10. Appended in
/// order, skipping entries already present; if the pool runs dry the list
/// stays short of 10.
const GENERIC_QUESTIONS: [&str; 8] = [
    "Describe a time you had to learn a completely new technology exceptionally fast.",
    "What is the most challenging technical system problem you've debugged?",
    "How do you handle severe disagreements during peer code reviews?",
    "Where do you see yourself technically progressing over the next 3 years?",
    "Tell me about a project that fundamentally failed and what architecture lessons you learned.",
    "Explain OOP concepts (Polymorphism, Abstraction) with real-world design examples.",
    "What's your step-by-step process for debugging a critical production outage?",
    "How do you ensure your committed code remains readable and easily maintainable?",
];

/// Builds the question list: at most 10, never duplicated.
pub fn build_questions(skills: &SkillMap, category_count: usize) -> Vec<String> {
    let mut questions: Vec<String> = Vec::new();

    if category_has_any(skills, SkillCategory::Data, SQL_FAMILY) {
        push(&mut questions, "What is the difference between a clustered and non-clustered index? When is each useful?");
        push(&mut questions, "Can you explain how Window Functions (like RANK or ROW_NUMBER) operate over a data set?");
    }
    if category_has_any(skills, SkillCategory::Data, NOSQL_FAMILY) {
        push(&mut questions, "When would you explicitly choose a NoSQL database structure over a Relational database?");
    }
    if category_has_any(skills, SkillCategory::Web, WEB_FRAMEWORKS) {
        push(&mut questions, "Explain the difference between Client-Side Rendering and Server-Side Rendering.");
        push(&mut questions, "Describe the rendering phases of React and how the Virtual DOM reconciles changes.");
    }
    if category_has_any(skills, SkillCategory::Web, NODE_STACK) {
        push(&mut questions, "Explain the Event Loop in Node.js. How does it handle massive concurrent I/O operations?");
    }
    if category_has_any(skills, SkillCategory::CoreCs, &["DSA"]) || category_count == 0 {
        push(&mut questions, "What is the time complexity of searching in a Hash Map versus a Binary Search Tree, and why?");
        push(&mut questions, "How would you detect a cycle in a strictly directed graph?");
    }
    if category_has_any(skills, SkillCategory::Languages, JS_FAMILY) {
        push(&mut questions, "Explain closures in JavaScript and describe how they can unintentionally lead to memory leaks.");
        push(&mut questions, "How does prototypal inheritance differ from classical inheritance?");
    }
    if category_matched(skills, SkillCategory::CloudDevops) {
        push(&mut questions, "Describe the difference between a Virtual Machine and a Docker Container.");
    }

    questions.truncate(MAX_QUESTIONS);

    for generic in GENERIC_QUESTIONS {
        if questions.len() >= MAX_QUESTIONS {
            break;
        }
        push(&mut questions, generic);
    }

    questions
}

fn push(questions: &mut Vec<String>, question: &str) {
    if !questions.iter().any(|q| q == question) {
        questions.push(question.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::matcher::extract_skills;

    fn questions_for(jd: &str) -> Vec<String> {
        let e = extract_skills(jd);
        build_questions(&e.skills, e.category_count)
    }

    fn assert_no_duplicates(questions: &[String]) {
        let mut seen = std::collections::HashSet::new();
        for q in questions {
            assert!(seen.insert(q), "duplicate question: {q}");
        }
    }

    #[test]
    fn test_rich_jd_yields_exactly_ten() {
        let questions = questions_for("React, Node.js, SQL, MongoDB, DSA, JavaScript, Docker");
        assert_eq!(questions.len(), MAX_QUESTIONS);
        assert_no_duplicates(&questions);
    }

    #[test]
    fn test_specific_questions_lead_in_priority_order() {
        let questions = questions_for("SQL and React work");
        assert!(questions[0].contains("clustered"));
        assert!(questions[2].contains("Client-Side Rendering"));
    }

    #[test]
    fn test_empty_jd_gets_dsa_plus_generics() {
        let questions = questions_for("no stack words at all");
        assert_eq!(questions.len(), MAX_QUESTIONS);
        assert!(questions[0].contains("Hash Map"));
        assert!(questions[1].contains("cycle"));
        assert!(questions[2].contains("learn a completely new technology"));
    }

    #[test]
    fn test_cloud_only_jd_exhausts_generic_pool_below_ten() {
        // 1 specific (VM vs container) + 8 generics = 9; the pool runs dry.
        let questions = questions_for("Deploy to AWS with Docker");
        assert_eq!(questions.len(), 9);
        assert!(questions[0].contains("Virtual Machine"));
        assert_no_duplicates(&questions);
    }

    #[test]
    fn test_all_predicates_truncate_to_ten() {
        // Every predicate fires: 2+1+2+1+2+2+1 = 11 specific questions.
        let questions =
            questions_for("SQL MongoDB React Node.js DSA JavaScript Docker everywhere");
        assert_eq!(questions.len(), MAX_QUESTIONS);
        // The 11th specific (cloud) falls off the end.
        assert!(!questions.iter().any(|q| q.contains("Virtual Machine")));
        assert_no_duplicates(&questions);
    }

    #[test]
    fn test_never_exceeds_ten_for_any_input() {
        for jd in [
            "",
            "plain text",
            "SQL",
            "React and SQL and Docker and Python and Selenium and DSA and MongoDB",
        ] {
            assert!(questions_for(jd).len() <= MAX_QUESTIONS);
        }
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let jd = "React, SQL and Kubernetes";
        assert_eq!(questions_for(jd), questions_for(jd));
    }
}
