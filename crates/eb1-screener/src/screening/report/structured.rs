use serde::{Deserialize, Serialize};

use super::super::domain::{AttributeKey, AttributeSource, CriterionGroup};
use super::super::engine::RuleId;
use super::super::outcome::OutcomeRecord;
use super::format::{format_value, strip_decorations};
use super::labels::LabelTable;
use super::RenderError;

/// Plain-text summary of the outcome. No glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSection {
    pub rule: RuleId,
    pub category: String,
    pub status: String,
    pub score: String,
    pub strength: String,
    pub color: String,
    pub title: String,
    pub details: String,
    pub processing: String,
    pub next_steps: Vec<String>,
}

/// One answered question, in label-table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeLine {
    pub key: AttributeKey,
    pub group: CriterionGroup,
    pub question: String,
    pub answer: String,
}

/// Machine-readable export of a screening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredReport {
    pub assessment: AssessmentSection,
    pub attributes: Vec<AttributeLine>,
}

pub fn to_structured_report<S>(
    attributes: &S,
    outcome: &OutcomeRecord,
    labels: &LabelTable,
) -> StructuredReport
where
    S: AttributeSource + ?Sized,
{
    let assessment = AssessmentSection {
        rule: outcome.rule,
        category: strip_decorations(outcome.category.label()),
        status: strip_decorations(&outcome.status.decorated()),
        score: outcome.score_label.clone(),
        strength: outcome.strength.label().to_string(),
        color: outcome.severity_color.hex().to_string(),
        title: outcome.title.clone(),
        details: outcome.narrative.clone(),
        processing: outcome.processing_note.clone(),
        next_steps: outcome.recommended_steps.clone(),
    };

    StructuredReport {
        assessment,
        attributes: attribute_lines(attributes, labels),
    }
}

pub(crate) fn attribute_lines<S>(attributes: &S, labels: &LabelTable) -> Vec<AttributeLine>
where
    S: AttributeSource + ?Sized,
{
    labels
        .iter()
        .map(|entry| AttributeLine {
            key: entry.key,
            group: entry.group,
            question: entry.question.clone(),
            answer: format_value(entry.key, attributes.attribute(entry.key).as_ref()),
        })
        .collect()
}

impl StructuredReport {
    pub fn to_json(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(input: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(input)?)
    }

    /// The attribute section as CSV with a `key,group,question,answer` header.
    pub fn attributes_csv(&self) -> Result<String, RenderError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for line in &self.attributes {
            writer.serialize(line)?;
        }
        let bytes = writer.into_inner().map_err(|err| err.into_error())?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Reads back a CSV attribute section written by [`StructuredReport::attributes_csv`].
    pub fn parse_attributes_csv(input: &str) -> Result<Vec<AttributeLine>, RenderError> {
        let mut reader = csv::Reader::from_reader(input.as_bytes());
        let mut lines = Vec::new();
        for record in reader.deserialize::<AttributeLine>() {
            lines.push(record?);
        }
        Ok(lines)
    }
}
