mod counters;
mod rules;
mod templates;

pub use counters::{CriteriaCounters, EB1A_CRITERIA, EB1B_FLAG_CRITERIA};
pub use rules::{Rule, RuleContext, RuleId};

use tracing::debug;

use super::domain::CanonicalAttributes;
use super::outcome::OutcomeRecord;
use rules::RULE_TABLE;

/// Stateless classifier over the ordered rule table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassificationEngine;

impl ClassificationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Rows in evaluation order.
    pub fn rules(&self) -> &'static [Rule] {
        &RULE_TABLE
    }

    pub fn classify(&self, attributes: &CanonicalAttributes) -> OutcomeRecord {
        let ctx = RuleContext::new(attributes);
        let rule = RULE_TABLE
            .iter()
            .find(|rule| rule.applies(&ctx))
            .unwrap_or(&RULE_TABLE[RULE_TABLE.len() - 1]);

        debug!(
            rule = ?rule.id(),
            count_a = ctx.counters.count_a,
            count_b = ctx.counters.count_b,
            "screening rule matched"
        );

        rule.outcome(&ctx)
    }

    /// Every row whose predicate holds, strongest first. The first entry is the one
    /// `classify` reports.
    pub fn matching_rules(&self, attributes: &CanonicalAttributes) -> Vec<RuleId> {
        let ctx = RuleContext::new(attributes);
        RULE_TABLE
            .iter()
            .filter(|rule| rule.applies(&ctx))
            .map(Rule::id)
            .collect()
    }
}

/// Classifies one canonical snapshot.
pub fn classify(attributes: &CanonicalAttributes) -> OutcomeRecord {
    ClassificationEngine::new().classify(attributes)
}
