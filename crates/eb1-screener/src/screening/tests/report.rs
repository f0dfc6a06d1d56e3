use super::common::*;
use crate::error::InputError;
use crate::screening::domain::{AttributeKey, CriterionGroup, RawAttributes};
use crate::screening::report::{
    render, to_narrative_report, to_structured_report, LabelEntry, LabelTable, ReportFormat,
    StructuredReport, DISCLAIMER,
};

#[test]
fn structured_attributes_follow_label_table_order() {
    let raw = qualified_eb1a();
    let (_, outcome) = classified(&raw);
    let labels = labels();

    let report = to_structured_report(&raw, &outcome, &labels);

    let keys: Vec<AttributeKey> = report.attributes.iter().map(|line| line.key).collect();
    let expected: Vec<AttributeKey> = labels.iter().map(|entry| entry.key).collect();
    assert_eq!(keys, expected);
    assert_eq!(report.attributes.len(), 21);
}

#[test]
fn structured_status_and_category_are_plain_text() {
    let raw = qualified_eb1a();
    let (_, outcome) = classified(&raw);

    let report = to_structured_report(&raw, &outcome, &labels());

    assert_eq!(report.assessment.status, "QUALIFIED");
    assert_eq!(report.assessment.category, "EB-1A");
    assert_eq!(report.assessment.score, "3/10");
    assert!(report.assessment.status.is_ascii());
    assert_eq!(report.assessment.next_steps, outcome.recommended_steps);
}

#[test]
fn values_are_formatted_per_key_kind() {
    let raw = RawAttributes::new()
        .with("judging", true)
        .with("experience", "3_years")
        .with("offer", "yes")
        .with("tenure", "maybe");
    let (_, outcome) = classified(&raw);

    let report = to_structured_report(&raw, &outcome, &labels());
    let answer = |key: AttributeKey| {
        report
            .attributes
            .iter()
            .find(|line| line.key == key)
            .map(|line| line.answer.clone())
            .expect("key present")
    };

    assert_eq!(answer(AttributeKey::Judging), "Yes");
    assert_eq!(answer(AttributeKey::Publications), "No");
    assert_eq!(answer(AttributeKey::Experience), "3+ years");
    assert_eq!(answer(AttributeKey::Offer), "Yes");
    assert_eq!(answer(AttributeKey::Tenure), "maybe");
    assert_eq!(answer(AttributeKey::Transfer), "No");
}

#[test]
fn canonical_source_shows_merged_channel_values() {
    let raw = flags(&[AttributeKey::MembershipB]);
    let (canonical, outcome) = classified(&raw);
    let labels = labels();

    let as_submitted = to_structured_report(&raw, &outcome, &labels);
    let merged = to_structured_report(&canonical, &outcome, &labels);
    let answer = |report: &StructuredReport, key: AttributeKey| {
        report
            .attributes
            .iter()
            .find(|line| line.key == key)
            .map(|line| line.answer.clone())
            .expect("key present")
    };

    assert_eq!(answer(&as_submitted, AttributeKey::Membership), "No");
    assert_eq!(answer(&as_submitted, AttributeKey::MembershipB), "Yes");
    assert_eq!(answer(&merged, AttributeKey::Membership), "Yes");
    assert_eq!(answer(&merged, AttributeKey::MembershipB), "Yes");
}

#[test]
fn csv_attribute_section_reads_back_unchanged() {
    let raw = RawAttributes::new()
        .with("publications", true)
        .with("experience", "3_years")
        .with("offer", "Pending, maybe")
        .with("managerial_role", "yes");
    let (canonical, outcome) = classified(&raw);
    let labels = labels();

    let report = to_structured_report(&canonical, &outcome, &labels);
    let csv = report.attributes_csv().expect("csv rendered");
    let parsed = StructuredReport::parse_attributes_csv(&csv).expect("csv parsed");

    assert!(csv.starts_with("key,group,question,answer\n"));
    assert_eq!(parsed, report.attributes);
}

#[test]
fn json_report_reads_back_unchanged() {
    let raw = qualified_eb1a();
    let (_, outcome) = classified(&raw);

    let report = to_structured_report(&raw, &outcome, &labels());
    let json = report.to_json().expect("json rendered");

    assert_eq!(StructuredReport::from_json(&json).expect("json parsed"), report);
}

#[test]
fn narrative_keeps_glyph_and_section_order() {
    let raw = qualified_eb1a();
    let (_, outcome) = classified(&raw);

    let text = to_narrative_report(&raw, &outcome, &labels());

    assert!(text.contains("RESULT: \u{2705} QUALIFIED"));
    let positions: Vec<usize> = [
        "ASSESSMENT DETAILS",
        "PROCESSING GUIDANCE",
        "RECOMMENDED NEXT STEPS",
        "SUBMITTED QUALIFICATIONS",
        "DISCLAIMER",
    ]
    .iter()
    .map(|heading| text.find(heading).expect("section present"))
    .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(text.contains(&format!("1. {}", outcome.recommended_steps[0])));
    assert!(text.trim_end().ends_with(DISCLAIMER));
}

#[test]
fn narrative_groups_questions_by_category() {
    let raw = flags(&[AttributeKey::Judging]);
    let (_, outcome) = classified(&raw);

    let text = to_narrative_report(&raw, &outcome, &labels());

    let a = text.find(CriterionGroup::Eb1a.label()).expect("A heading");
    let b = text.find(CriterionGroup::Eb1b.label()).expect("B heading");
    let c = text.find(CriterionGroup::Eb1c.label()).expect("C heading");
    assert!(a < b && b < c);
    assert!(text.contains("  - Judged work of others (peer reviewer, panelist): Yes"));
    assert!(text.contains("  - Research/teaching experience: Less than 3 years"));
}

#[test]
fn custom_tables_drive_the_order() {
    let raw = qualified_eb1a();
    let (_, outcome) = classified(&raw);
    let labels = LabelTable::new(vec![
        LabelEntry::new(AttributeKey::HighSalary, "Salary"),
        LabelEntry::new(AttributeKey::Judging, "Judging"),
    ]);

    let report = to_structured_report(&raw, &outcome, &labels);

    let questions: Vec<&str> = report
        .attributes
        .iter()
        .map(|line| line.question.as_str())
        .collect();
    assert_eq!(questions, vec!["Salary", "Judging"]);
}

#[test]
fn render_dispatches_on_format() {
    let raw = qualified_eb1a();
    let (_, outcome) = classified(&raw);
    let labels = labels();

    let text = render(ReportFormat::Text, &raw, &outcome, &labels).expect("text");
    let json = render(ReportFormat::Json, &raw, &outcome, &labels).expect("json");
    let csv = render(ReportFormat::Csv, &raw, &outcome, &labels).expect("csv");

    assert!(text.starts_with("EB-1 ELIGIBILITY SCREENING REPORT"));
    assert!(json.trim_start().starts_with('{'));
    assert_eq!(csv.lines().count(), 22);
}

#[test]
fn report_formats_parse_aliases() {
    assert_eq!("TXT".parse::<ReportFormat>().ok(), Some(ReportFormat::Text));
    assert_eq!(" json ".parse::<ReportFormat>().ok(), Some(ReportFormat::Json));
    assert_eq!("csv".parse::<ReportFormat>().ok(), Some(ReportFormat::Csv));
    assert!(matches!(
        "pdf".parse::<ReportFormat>(),
        Err(InputError::Format(format)) if format == "pdf"
    ));
}
