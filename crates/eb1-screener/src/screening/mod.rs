//! EB-1 screening: intake normalization, the ordered rule table, and report serializers.
//!
//! Every step is a pure function of one complete submission. Callers hand in a
//! [`RawAttributes`] snapshot, [`normalize`] merges the facts that intake collects under more
//! than one key, and [`classify`] walks the rule table to exactly one [`OutcomeRecord`].

pub mod domain;
pub mod engine;
pub mod export;
pub mod intake;
pub mod normalizer;
pub mod outcome;
pub mod report;
pub mod router;

#[cfg(test)]
mod tests;

pub use domain::{
    Answer, AttributeKey, AttributeKind, AttributeSource, AttributeValue, CanonicalAttributes,
    CriterionGroup, Experience, RawAttributes,
};
pub use engine::{classify, ClassificationEngine, CriteriaCounters, RuleId};
pub use export::{report_file_name, ExportError, FileSink, ReportSink};
pub use normalizer::normalize;
pub use outcome::{Category, OutcomeRecord, SeverityColor, StatusLevel, StrengthTag};
pub use report::{LabelTable, RenderError, ReportFormat, StructuredReport};
pub use router::{screening_router, ScreeningResponse};

use serde::{Deserialize, Serialize};

/// Everything one evaluation derives from a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screening {
    pub canonical: CanonicalAttributes,
    pub counters: CriteriaCounters,
    pub outcome: OutcomeRecord,
}

/// Normalizes and classifies a raw submission.
pub fn screen(raw: &RawAttributes) -> Screening {
    let canonical = normalize(raw);
    let counters = CriteriaCounters::tally(&canonical);
    let outcome = classify(&canonical);

    Screening {
        canonical,
        counters,
        outcome,
    }
}
