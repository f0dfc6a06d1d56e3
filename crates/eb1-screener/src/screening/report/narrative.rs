use std::fmt::Write as _;

use super::super::domain::{AttributeSource, CriterionGroup};
use super::super::outcome::OutcomeRecord;
use super::labels::LabelTable;
use super::structured::attribute_lines;

pub const DISCLAIMER: &str = "IMPORTANT DISCLAIMER: This is a preliminary screening tool only \
and does NOT constitute legal advice. EB-1 eligibility depends on the quality and strength of \
documentation, not just meeting criteria. Consult with a qualified immigration attorney for a \
comprehensive case evaluation and petition strategy.";

/// Section-headed prose report. The status banner keeps its glyph.
pub fn to_narrative_report<S>(attributes: &S, outcome: &OutcomeRecord, labels: &LabelTable) -> String
where
    S: AttributeSource + ?Sized,
{
    let mut content = String::new();

    writeln!(&mut content, "EB-1 ELIGIBILITY SCREENING REPORT").expect("write heading");
    writeln!(&mut content, "{}", "=".repeat(33)).expect("write rule");
    writeln!(&mut content).expect("write spacer");

    writeln!(&mut content, "RESULT: {}", outcome.status.decorated()).expect("write status");
    writeln!(
        &mut content,
        "Recommended Category: {}",
        outcome.category.label()
    )
    .expect("write category");
    writeln!(&mut content, "{}", outcome.title).expect("write title");
    writeln!(&mut content, "Score: {}", outcome.score_label).expect("write score");
    writeln!(&mut content, "Strength: {}", outcome.strength.label()).expect("write strength");

    write_section(&mut content, "ASSESSMENT DETAILS");
    writeln!(&mut content, "{}", outcome.narrative).expect("write narrative");

    write_section(&mut content, "PROCESSING GUIDANCE");
    writeln!(&mut content, "{}", outcome.processing_note).expect("write processing note");

    write_section(&mut content, "RECOMMENDED NEXT STEPS");
    for (index, step) in outcome.recommended_steps.iter().enumerate() {
        writeln!(&mut content, "{}. {}", index + 1, step).expect("write step");
    }

    write_section(&mut content, "SUBMITTED QUALIFICATIONS");
    // Table order is kept; a group heading is written whenever the group changes.
    let mut current: Option<CriterionGroup> = None;
    for line in attribute_lines(attributes, labels) {
        if current != Some(line.group) {
            writeln!(&mut content, "{}", line.group.label()).expect("write group");
            current = Some(line.group);
        }
        writeln!(&mut content, "  - {}: {}", line.question, line.answer)
            .expect("write attribute");
    }

    write_section(&mut content, "DISCLAIMER");
    writeln!(&mut content, "{DISCLAIMER}").expect("write disclaimer");

    content
}

fn write_section(content: &mut String, heading: &str) {
    writeln!(content).expect("write spacer");
    writeln!(content, "{heading}").expect("write section heading");
    writeln!(content, "{}", "-".repeat(heading.len())).expect("write section rule");
}
