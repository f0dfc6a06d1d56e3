//! Report serializers for a screening outcome.
//!
//! Both forms are pure functions of the attribute source, the outcome and the label table, and
//! list attributes in label-table order.

mod format;
mod labels;
mod narrative;
mod structured;

pub use format::{format_value, strip_decorations, ReportFormat};
pub use labels::{LabelEntry, LabelTable};
pub use narrative::{to_narrative_report, DISCLAIMER};
pub use structured::{to_structured_report, AssessmentSection, AttributeLine, StructuredReport};

use super::domain::AttributeSource;
use super::outcome::OutcomeRecord;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("report buffer error: {0}")]
    Io(#[from] std::io::Error),
    #[error("report is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Renders the report in `format`. CSV carries the attribute section only.
pub fn render<S>(
    format: ReportFormat,
    attributes: &S,
    outcome: &OutcomeRecord,
    labels: &LabelTable,
) -> Result<String, RenderError>
where
    S: AttributeSource + ?Sized,
{
    match format {
        ReportFormat::Text => Ok(to_narrative_report(attributes, outcome, labels)),
        ReportFormat::Json => to_structured_report(attributes, outcome, labels).to_json(),
        ReportFormat::Csv => to_structured_report(attributes, outcome, labels).attributes_csv(),
    }
}
