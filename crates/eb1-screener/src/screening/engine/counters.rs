use serde::{Deserialize, Serialize};

use super::super::domain::{AttributeKey, CanonicalAttributes};

/// The nine category-A criteria. The major award is an override, not a criterion.
pub const EB1A_CRITERIA: [AttributeKey; 9] = [
    AttributeKey::LesserAwards,
    AttributeKey::Membership,
    AttributeKey::Publications,
    AttributeKey::Judging,
    AttributeKey::OriginalContributions,
    AttributeKey::Authorship,
    AttributeKey::Performances,
    AttributeKey::HighSalary,
    AttributeKey::CommercialSuccess,
];

/// Boolean category-B criteria. Tenure is the sixth and is counted from its answer.
/// The last two are the canonical shared facts, never their channel keys.
pub const EB1B_FLAG_CRITERIA: [AttributeKey; 5] = [
    AttributeKey::PublishedArticles,
    AttributeKey::JudgingResearch,
    AttributeKey::OriginalContributionsResearch,
    AttributeKey::LesserAwards,
    AttributeKey::Membership,
];

/// Derived counters every rule predicate reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaCounters {
    pub count_a: u8,
    pub count_b: u8,
    pub has_b_basics: bool,
    pub eligible_b: bool,
    pub eligible_c: bool,
    pub partial_c: bool,
}

impl CriteriaCounters {
    pub fn tally(attributes: &CanonicalAttributes) -> Self {
        let count_a = count_flags(attributes, &EB1A_CRITERIA);
        let count_b =
            count_flags(attributes, &EB1B_FLAG_CRITERIA) + u8::from(attributes.tenure.is_yes());

        let has_b_basics = attributes.experience.is_met() && attributes.offer.is_yes();
        let eligible_b = has_b_basics && count_b >= 2;

        let c_answers = [
            &attributes.managerial_role,
            &attributes.one_year_exp,
            &attributes.transfer,
        ];
        let eligible_c = c_answers.iter().all(|answer| answer.is_yes());
        let partial_c = c_answers.iter().any(|answer| answer.is_yes());

        Self {
            count_a,
            count_b,
            has_b_basics,
            eligible_b,
            eligible_c,
            partial_c,
        }
    }
}

fn count_flags(attributes: &CanonicalAttributes, keys: &[AttributeKey]) -> u8 {
    keys.iter()
        .filter(|key| attributes.flag(**key).unwrap_or(false))
        .count() as u8
}
