//! Plain-text export of an analysis: plan, checklist, questions.
//! The embedding UI owns clipboard and file-download plumbing; this module
//! only renders.

use crate::models::record::AnalysisRecord;

/// Renders the record's plan, checklist and questions as plain text.
///
/// Format: a header per section; plan entries as `{day} - {focus}` followed
/// by one task per line, blank line between entries; checklist rounds as the
/// round title followed by `- {item}` lines; questions as `{n}. {question}`.
pub fn render_export(record: &AnalysisRecord) -> String {
    let mut out = String::new();

    out.push_str("7-Day Preparation Plan\n\n");
    for (i, entry) in record.plan7_days.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{} - {}\n", entry.day, entry.focus));
        for task in &entry.tasks {
            out.push_str(task);
            out.push('\n');
        }
    }

    out.push_str("\nRound-wise Checklist\n\n");
    for (i, round) in record.checklist.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&round.round_title);
        out.push('\n');
        for item in &round.items {
            out.push_str(&format!("- {item}\n"));
        }
    }

    out.push_str("\nLikely Interview Questions\n\n");
    for (n, question) in record.questions.iter().enumerate() {
        out.push_str(&format!("{}. {question}\n", n + 1));
    }

    out
}
