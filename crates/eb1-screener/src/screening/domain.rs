use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Value as submitted by an intake form or API caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Flag(bool),
    Choice(String),
}

impl AttributeValue {
    /// Literal form used when a value cannot be interpreted for its key.
    pub fn literal(&self) -> String {
        match self {
            AttributeValue::Flag(value) => value.to_string(),
            AttributeValue::Choice(value) => value.clone(),
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Choice(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Choice(value)
    }
}

/// Flat snapshot of one submission, keyed by the intake field name.
///
/// Every key is optional and a `null` answer counts as absent. Unknown keys are carried along
/// so exporters can echo them, but the normalizer never reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawAttributes(BTreeMap<String, AttributeValue>);

impl<'de> Deserialize<'de> for RawAttributes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let answers = BTreeMap::<String, Option<AttributeValue>>::deserialize(deserializer)?;
        Ok(Self(
            answers
                .into_iter()
                .filter_map(|(key, value)| value.map(|value| (key, value)))
                .collect(),
        ))
    }
}

impl RawAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawAttributes
where
    K: Into<String>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Screening track a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionGroup {
    Eb1a,
    Eb1b,
    Eb1c,
}

impl CriterionGroup {
    pub const fn ordered() -> [Self; 3] {
        [Self::Eb1a, Self::Eb1b, Self::Eb1c]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Eb1a => "EB-1A: Extraordinary Ability",
            Self::Eb1b => "EB-1B: Outstanding Researcher/Professor",
            Self::Eb1c => "EB-1C: Multinational Manager/Executive",
        }
    }
}

/// Value domain of an intake key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    Flag,
    Experience,
    Answer,
}

/// Every intake key the screener understands, including the category-B channel keys that
/// alias category-A facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKey {
    MajorAward,
    LesserAwards,
    Membership,
    Publications,
    Judging,
    OriginalContributions,
    Authorship,
    Performances,
    HighSalary,
    CommercialSuccess,
    Experience,
    Offer,
    Tenure,
    PublishedArticles,
    JudgingResearch,
    OriginalContributionsResearch,
    LesserAwardsB,
    MembershipB,
    OneYearExp,
    Transfer,
    ManagerialRole,
}

impl AttributeKey {
    pub const ALL: [AttributeKey; 21] = [
        AttributeKey::MajorAward,
        AttributeKey::LesserAwards,
        AttributeKey::Membership,
        AttributeKey::Publications,
        AttributeKey::Judging,
        AttributeKey::OriginalContributions,
        AttributeKey::Authorship,
        AttributeKey::Performances,
        AttributeKey::HighSalary,
        AttributeKey::CommercialSuccess,
        AttributeKey::Experience,
        AttributeKey::Offer,
        AttributeKey::Tenure,
        AttributeKey::PublishedArticles,
        AttributeKey::JudgingResearch,
        AttributeKey::OriginalContributionsResearch,
        AttributeKey::LesserAwardsB,
        AttributeKey::MembershipB,
        AttributeKey::OneYearExp,
        AttributeKey::Transfer,
        AttributeKey::ManagerialRole,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            AttributeKey::MajorAward => "major_award",
            AttributeKey::LesserAwards => "lesser_awards",
            AttributeKey::Membership => "membership",
            AttributeKey::Publications => "publications",
            AttributeKey::Judging => "judging",
            AttributeKey::OriginalContributions => "original_contributions",
            AttributeKey::Authorship => "authorship",
            AttributeKey::Performances => "performances",
            AttributeKey::HighSalary => "high_salary",
            AttributeKey::CommercialSuccess => "commercial_success",
            AttributeKey::Experience => "experience",
            AttributeKey::Offer => "offer",
            AttributeKey::Tenure => "tenure",
            AttributeKey::PublishedArticles => "published_articles",
            AttributeKey::JudgingResearch => "judging_research",
            AttributeKey::OriginalContributionsResearch => "original_contributions_research",
            AttributeKey::LesserAwardsB => "lesser_awards_b",
            AttributeKey::MembershipB => "membership_b",
            AttributeKey::OneYearExp => "one_year_exp",
            AttributeKey::Transfer => "transfer",
            AttributeKey::ManagerialRole => "managerial_role",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|candidate| candidate.as_str() == key)
    }

    pub const fn kind(self) -> AttributeKind {
        match self {
            AttributeKey::Experience => AttributeKind::Experience,
            AttributeKey::Offer
            | AttributeKey::Tenure
            | AttributeKey::OneYearExp
            | AttributeKey::Transfer
            | AttributeKey::ManagerialRole => AttributeKind::Answer,
            _ => AttributeKind::Flag,
        }
    }

    pub const fn group(self) -> CriterionGroup {
        match self {
            AttributeKey::MajorAward
            | AttributeKey::LesserAwards
            | AttributeKey::Membership
            | AttributeKey::Publications
            | AttributeKey::Judging
            | AttributeKey::OriginalContributions
            | AttributeKey::Authorship
            | AttributeKey::Performances
            | AttributeKey::HighSalary
            | AttributeKey::CommercialSuccess => CriterionGroup::Eb1a,
            AttributeKey::Experience
            | AttributeKey::Offer
            | AttributeKey::Tenure
            | AttributeKey::PublishedArticles
            | AttributeKey::JudgingResearch
            | AttributeKey::OriginalContributionsResearch
            | AttributeKey::LesserAwardsB
            | AttributeKey::MembershipB => CriterionGroup::Eb1b,
            AttributeKey::OneYearExp | AttributeKey::Transfer | AttributeKey::ManagerialRole => {
                CriterionGroup::Eb1c
            }
        }
    }

    /// Canonical key holding the merged value of this key's fact.
    pub const fn canonical(self) -> Self {
        match self {
            AttributeKey::LesserAwardsB => AttributeKey::LesserAwards,
            AttributeKey::MembershipB => AttributeKey::Membership,
            other => other,
        }
    }

    pub const fn is_channel_alias(self) -> bool {
        matches!(self, AttributeKey::LesserAwardsB | AttributeKey::MembershipB)
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interpretation of a submitted value for a boolean achievement flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagReading {
    Set(bool),
    Unrecognized(String),
}

impl FlagReading {
    pub fn from_value(value: &AttributeValue) -> Self {
        match value {
            AttributeValue::Flag(flag) => Self::Set(*flag),
            AttributeValue::Choice(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Self::Set(true),
                "false" | "no" | "0" | "" => Self::Set(false),
                _ => Self::Unrecognized(raw.trim().to_string()),
            },
        }
    }

    /// Anything that is not an explicit true counts as not met.
    pub fn is_met(&self) -> bool {
        matches!(self, Self::Set(true))
    }
}

/// Years of qualifying research or teaching experience.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Experience {
    #[default]
    UnderThreeYears,
    ThreeYears,
    Unrecognized(String),
}

impl Experience {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "3_years" => Self::ThreeYears,
            "under_3_years" | "<3_years" | "" => Self::UnderThreeYears,
            _ => Self::Unrecognized(trimmed.to_string()),
        }
    }

    pub fn from_value(value: &AttributeValue) -> Self {
        match value {
            AttributeValue::Choice(raw) => Self::parse(raw),
            AttributeValue::Flag(flag) => Self::Unrecognized(flag.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::UnderThreeYears => "under_3_years",
            Self::ThreeYears => "3_years",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_met(&self) -> bool {
        matches!(self, Self::ThreeYears)
    }
}

impl From<String> for Experience {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Experience> for String {
    fn from(value: Experience) -> Self {
        value.as_str().to_string()
    }
}

/// Answer to a yes/no requirement question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Answer {
    #[default]
    No,
    Yes,
    Unrecognized(String),
}

impl Answer {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "yes" => Self::Yes,
            "no" | "" => Self::No,
            _ => Self::Unrecognized(trimmed.to_string()),
        }
    }

    pub fn from_value(value: &AttributeValue) -> Self {
        match value {
            AttributeValue::Flag(true) => Self::Yes,
            AttributeValue::Flag(false) => Self::No,
            AttributeValue::Choice(raw) => Self::parse(raw),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::No => "no",
            Self::Yes => "yes",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Answer> for String {
    fn from(value: Answer) -> Self {
        value.as_str().to_string()
    }
}

/// Normalized submission: one authoritative value per fact, channel aliases already merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanonicalAttributes {
    pub major_award: bool,
    pub lesser_awards: bool,
    pub membership: bool,
    pub publications: bool,
    pub judging: bool,
    pub original_contributions: bool,
    pub authorship: bool,
    pub performances: bool,
    pub high_salary: bool,
    pub commercial_success: bool,
    pub published_articles: bool,
    pub judging_research: bool,
    pub original_contributions_research: bool,
    pub experience: Experience,
    pub offer: Answer,
    pub tenure: Answer,
    pub one_year_exp: Answer,
    pub transfer: Answer,
    pub managerial_role: Answer,
}

impl CanonicalAttributes {
    /// Boolean fact behind `key`; channel aliases read the merged value.
    pub fn flag(&self, key: AttributeKey) -> Option<bool> {
        let value = match key.canonical() {
            AttributeKey::MajorAward => self.major_award,
            AttributeKey::LesserAwards => self.lesser_awards,
            AttributeKey::Membership => self.membership,
            AttributeKey::Publications => self.publications,
            AttributeKey::Judging => self.judging,
            AttributeKey::OriginalContributions => self.original_contributions,
            AttributeKey::Authorship => self.authorship,
            AttributeKey::Performances => self.performances,
            AttributeKey::HighSalary => self.high_salary,
            AttributeKey::CommercialSuccess => self.commercial_success,
            AttributeKey::PublishedArticles => self.published_articles,
            AttributeKey::JudgingResearch => self.judging_research,
            AttributeKey::OriginalContributionsResearch => self.original_contributions_research,
            _ => return None,
        };
        Some(value)
    }

    pub(crate) fn flag_mut(&mut self, key: AttributeKey) -> Option<&mut bool> {
        let slot = match key {
            AttributeKey::MajorAward => &mut self.major_award,
            AttributeKey::LesserAwards => &mut self.lesser_awards,
            AttributeKey::Membership => &mut self.membership,
            AttributeKey::Publications => &mut self.publications,
            AttributeKey::Judging => &mut self.judging,
            AttributeKey::OriginalContributions => &mut self.original_contributions,
            AttributeKey::Authorship => &mut self.authorship,
            AttributeKey::Performances => &mut self.performances,
            AttributeKey::HighSalary => &mut self.high_salary,
            AttributeKey::CommercialSuccess => &mut self.commercial_success,
            AttributeKey::PublishedArticles => &mut self.published_articles,
            AttributeKey::JudgingResearch => &mut self.judging_research,
            AttributeKey::OriginalContributionsResearch => {
                &mut self.original_contributions_research
            }
            _ => return None,
        };
        Some(slot)
    }

    pub fn answer(&self, key: AttributeKey) -> Option<&Answer> {
        match key {
            AttributeKey::Offer => Some(&self.offer),
            AttributeKey::Tenure => Some(&self.tenure),
            AttributeKey::OneYearExp => Some(&self.one_year_exp),
            AttributeKey::Transfer => Some(&self.transfer),
            AttributeKey::ManagerialRole => Some(&self.managerial_role),
            _ => None,
        }
    }
}

/// Read access to a submission for exporters, independent of whether it is raw or normalized.
pub trait AttributeSource {
    /// Value held for `key`, or `None` when the source has nothing for it.
    fn attribute(&self, key: AttributeKey) -> Option<AttributeValue>;
}

impl AttributeSource for RawAttributes {
    fn attribute(&self, key: AttributeKey) -> Option<AttributeValue> {
        self.get(key.as_str()).cloned()
    }
}

impl AttributeSource for CanonicalAttributes {
    fn attribute(&self, key: AttributeKey) -> Option<AttributeValue> {
        match key.kind() {
            AttributeKind::Flag => self.flag(key).map(AttributeValue::Flag),
            AttributeKind::Experience => {
                Some(AttributeValue::Choice(self.experience.as_str().to_string()))
            }
            AttributeKind::Answer => self
                .answer(key)
                .map(|answer| AttributeValue::Choice(answer.as_str().to_string())),
        }
    }
}
