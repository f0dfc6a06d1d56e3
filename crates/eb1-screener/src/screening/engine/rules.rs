use serde::{Deserialize, Serialize};

use super::super::domain::CanonicalAttributes;
use super::super::outcome::OutcomeRecord;
use super::counters::CriteriaCounters;
use super::templates;

/// Identifies a row of the rule table, in evaluation order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    MajorAwardOverride,
    Eb1aExceptional,
    Eb1aVeryStrong,
    Eb1aQualified,
    Eb1bExceptional,
    Eb1bVeryStrong,
    Eb1bQualified,
    Eb1cQualified,
    Eb1bNeedsExperience,
    Eb1bNeedsJobOffer,
    Eb1bOneShort,
    Eb1aOneShort,
    DualPotential,
    WeakProfile,
    Eb1cIncomplete,
    NotEligible,
}

impl RuleId {
    /// One-based row number in the rule table.
    pub fn position(self) -> usize {
        self as usize + 1
    }

    pub const fn condition(self) -> &'static str {
        match self {
            RuleId::MajorAwardOverride => "major_award",
            RuleId::Eb1aExceptional => "count_a >= 7",
            RuleId::Eb1aVeryStrong => "count_a >= 5",
            RuleId::Eb1aQualified => "count_a >= 3",
            RuleId::Eb1bExceptional => "eligible_b && count_b >= 5",
            RuleId::Eb1bVeryStrong => "eligible_b && count_b >= 3",
            RuleId::Eb1bQualified => "eligible_b",
            RuleId::Eb1cQualified => "eligible_c",
            RuleId::Eb1bNeedsExperience => "count_b >= 2 && offer == yes && experience != 3_years",
            RuleId::Eb1bNeedsJobOffer => "count_b >= 2 && experience == 3_years && offer != yes",
            RuleId::Eb1bOneShort => "has_b_basics && count_b == 1",
            RuleId::Eb1aOneShort => "count_a == 2",
            RuleId::DualPotential => "count_a == 1 && count_b >= 1",
            RuleId::WeakProfile => "count_a == 1 || count_b == 1",
            RuleId::Eb1cIncomplete => "count_a == 0 && count_b == 0 && partial_c && !eligible_c",
            RuleId::NotEligible => "always",
        }
    }
}

/// Inputs every predicate and template reads.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub attributes: &'a CanonicalAttributes,
    pub counters: CriteriaCounters,
}

impl<'a> RuleContext<'a> {
    pub fn new(attributes: &'a CanonicalAttributes) -> Self {
        Self {
            attributes,
            counters: CriteriaCounters::tally(attributes),
        }
    }
}

/// One row of the table: a predicate and the outcome it produces.
pub struct Rule {
    id: RuleId,
    applies: fn(&RuleContext<'_>) -> bool,
    outcome: fn(&RuleContext<'_>) -> OutcomeRecord,
}

impl Rule {
    pub fn id(&self) -> RuleId {
        self.id
    }

    pub fn applies(&self, ctx: &RuleContext<'_>) -> bool {
        (self.applies)(ctx)
    }

    pub fn outcome(&self, ctx: &RuleContext<'_>) -> OutcomeRecord {
        (self.outcome)(ctx)
    }
}

/// Evaluated top to bottom; the first matching row wins. Predicates overlap, so stronger and
/// more specific rows must precede the rows they would otherwise be shadowed by. The last row
/// always matches.
pub(crate) static RULE_TABLE: [Rule; 16] = [
    Rule {
        id: RuleId::MajorAwardOverride,
        applies: has_major_award,
        outcome: templates::major_award_override,
    },
    Rule {
        id: RuleId::Eb1aExceptional,
        applies: eb1a_at_least_7,
        outcome: templates::eb1a_exceptional,
    },
    Rule {
        id: RuleId::Eb1aVeryStrong,
        applies: eb1a_at_least_5,
        outcome: templates::eb1a_very_strong,
    },
    Rule {
        id: RuleId::Eb1aQualified,
        applies: eb1a_at_least_3,
        outcome: templates::eb1a_qualified,
    },
    Rule {
        id: RuleId::Eb1bExceptional,
        applies: eb1b_eligible_at_least_5,
        outcome: templates::eb1b_exceptional,
    },
    Rule {
        id: RuleId::Eb1bVeryStrong,
        applies: eb1b_eligible_at_least_3,
        outcome: templates::eb1b_very_strong,
    },
    Rule {
        id: RuleId::Eb1bQualified,
        applies: eb1b_eligible,
        outcome: templates::eb1b_qualified,
    },
    Rule {
        id: RuleId::Eb1cQualified,
        applies: eb1c_eligible,
        outcome: templates::eb1c_qualified,
    },
    Rule {
        id: RuleId::Eb1bNeedsExperience,
        applies: eb1b_missing_experience,
        outcome: templates::eb1b_needs_experience,
    },
    Rule {
        id: RuleId::Eb1bNeedsJobOffer,
        applies: eb1b_missing_offer,
        outcome: templates::eb1b_needs_job_offer,
    },
    Rule {
        id: RuleId::Eb1bOneShort,
        applies: eb1b_one_short,
        outcome: templates::eb1b_one_short,
    },
    Rule {
        id: RuleId::Eb1aOneShort,
        applies: eb1a_exactly_2,
        outcome: templates::eb1a_one_short,
    },
    Rule {
        id: RuleId::DualPotential,
        applies: dual_potential,
        outcome: templates::dual_potential,
    },
    Rule {
        id: RuleId::WeakProfile,
        applies: single_criterion,
        outcome: templates::weak_profile,
    },
    Rule {
        id: RuleId::Eb1cIncomplete,
        applies: eb1c_partial_only,
        outcome: templates::eb1c_incomplete,
    },
    Rule {
        id: RuleId::NotEligible,
        applies: always,
        outcome: templates::not_eligible,
    },
];

fn has_major_award(ctx: &RuleContext<'_>) -> bool {
    ctx.attributes.major_award
}

fn eb1a_at_least_7(ctx: &RuleContext<'_>) -> bool {
    ctx.counters.count_a >= 7
}

fn eb1a_at_least_5(ctx: &RuleContext<'_>) -> bool {
    ctx.counters.count_a >= 5
}

fn eb1a_at_least_3(ctx: &RuleContext<'_>) -> bool {
    ctx.counters.count_a >= 3
}

fn eb1b_eligible_at_least_5(ctx: &RuleContext<'_>) -> bool {
    ctx.counters.eligible_b && ctx.counters.count_b >= 5
}

fn eb1b_eligible_at_least_3(ctx: &RuleContext<'_>) -> bool {
    ctx.counters.eligible_b && ctx.counters.count_b >= 3
}

fn eb1b_eligible(ctx: &RuleContext<'_>) -> bool {
    ctx.counters.eligible_b
}

fn eb1c_eligible(ctx: &RuleContext<'_>) -> bool {
    ctx.counters.eligible_c
}

fn eb1b_missing_experience(ctx: &RuleContext<'_>) -> bool {
    ctx.counters.count_b >= 2
        && ctx.attributes.offer.is_yes()
        && !ctx.attributes.experience.is_met()
}

fn eb1b_missing_offer(ctx: &RuleContext<'_>) -> bool {
    ctx.counters.count_b >= 2
        && ctx.attributes.experience.is_met()
        && !ctx.attributes.offer.is_yes()
}

fn eb1b_one_short(ctx: &RuleContext<'_>) -> bool {
    ctx.counters.has_b_basics && ctx.counters.count_b == 1
}

fn eb1a_exactly_2(ctx: &RuleContext<'_>) -> bool {
    ctx.counters.count_a == 2
}

fn dual_potential(ctx: &RuleContext<'_>) -> bool {
    ctx.counters.count_a == 1 && ctx.counters.count_b >= 1
}

// Only reachable once dual_potential has failed, i.e. the other counter is zero.
fn single_criterion(ctx: &RuleContext<'_>) -> bool {
    ctx.counters.count_a == 1 || ctx.counters.count_b == 1
}

fn eb1c_partial_only(ctx: &RuleContext<'_>) -> bool {
    ctx.counters.count_a == 0
        && ctx.counters.count_b == 0
        && ctx.counters.partial_c
        && !ctx.counters.eligible_c
}

fn always(_ctx: &RuleContext<'_>) -> bool {
    true
}
