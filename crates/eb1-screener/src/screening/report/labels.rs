use serde::{Deserialize, Serialize};

use super::super::domain::{AttributeKey, CriterionGroup};

/// Question text shown for one intake key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEntry {
    pub key: AttributeKey,
    pub group: CriterionGroup,
    pub question: String,
}

impl LabelEntry {
    pub fn new(key: AttributeKey, question: impl Into<String>) -> Self {
        Self {
            key,
            group: key.group(),
            question: question.into(),
        }
    }
}

/// Ordered key to question table. Its order is the order attributes appear in every report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelTable {
    entries: Vec<LabelEntry>,
}

const STANDARD_QUESTIONS: [(AttributeKey, &str); 21] = [
    (
        AttributeKey::MajorAward,
        "Major internationally recognized award (Nobel, Oscar, Pulitzer, Olympic Medal)",
    ),
    (
        AttributeKey::LesserAwards,
        "Lesser nationally/internationally recognized awards",
    ),
    (
        AttributeKey::Membership,
        "Membership requiring outstanding achievements",
    ),
    (
        AttributeKey::Publications,
        "Published material about you in major media",
    ),
    (
        AttributeKey::Judging,
        "Judged work of others (peer reviewer, panelist)",
    ),
    (
        AttributeKey::OriginalContributions,
        "Original contributions of major significance",
    ),
    (AttributeKey::Authorship, "Authorship of scholarly articles"),
    (
        AttributeKey::Performances,
        "Work displayed at exhibitions/showcases",
    ),
    (
        AttributeKey::HighSalary,
        "High salary or significantly high remuneration",
    ),
    (
        AttributeKey::CommercialSuccess,
        "Commercial success in performing arts",
    ),
    (AttributeKey::Experience, "Research/teaching experience"),
    (AttributeKey::Offer, "Permanent US job offer"),
    (AttributeKey::Tenure, "Tenured/permanent position"),
    (
        AttributeKey::PublishedArticles,
        "Published articles in international academic journals (peer-reviewed)",
    ),
    (
        AttributeKey::JudgingResearch,
        "Judged research of others (peer review, grant panels)",
    ),
    (
        AttributeKey::OriginalContributionsResearch,
        "Original research contributions of major significance to field",
    ),
    (
        AttributeKey::LesserAwardsB,
        "Lesser nationally/internationally recognized awards (EB-1B specific)",
    ),
    (
        AttributeKey::MembershipB,
        "Membership requiring outstanding achievements (EB-1B specific)",
    ),
    (
        AttributeKey::OneYearExp,
        "Managerial/executive role abroad (1+ year)",
    ),
    (
        AttributeKey::Transfer,
        "Transferring to US affiliate/parent/subsidiary",
    ),
    (
        AttributeKey::ManagerialRole,
        "US role is also managerial/executive",
    ),
];

impl LabelTable {
    pub fn new(entries: Vec<LabelEntry>) -> Self {
        Self { entries }
    }

    /// The intake questionnaire: category A (major award first), then B, then C.
    pub fn standard() -> Self {
        Self::new(
            STANDARD_QUESTIONS
                .iter()
                .map(|(key, question)| LabelEntry::new(*key, *question))
                .collect(),
        )
    }

    pub fn entries(&self) -> &[LabelEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabelEntry> {
        self.entries.iter()
    }

    pub fn question(&self, key: AttributeKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.question.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LabelTable {
    fn default() -> Self {
        Self::standard()
    }
}
