use serde::{Deserialize, Serialize};

use super::engine::RuleId;

/// Category recommended by a screening outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "EB-1A")]
    Eb1a,
    #[serde(rename = "EB-1B")]
    Eb1b,
    #[serde(rename = "EB-1C")]
    Eb1c,
    /// Developing profile with criteria in both A and B.
    #[serde(rename = "EB-1A/EB-1B")]
    Eb1aOrEb1b,
    /// No single subcategory applies.
    #[serde(rename = "EB-1")]
    Eb1,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Category::Eb1a => "EB-1A",
            Category::Eb1b => "EB-1B",
            Category::Eb1c => "EB-1C",
            Category::Eb1aOrEb1b => "EB-1A/EB-1B",
            Category::Eb1 => "EB-1",
        }
    }
}

/// Confidence tier of an outcome, declared weakest first so `Ord` ranks them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StatusLevel {
    NotEligible,
    WeakProfile,
    PartialEb1c,
    Potential,
    OneCriterionShort,
    NeedsJobOffer,
    NeedsExperience,
    Qualified,
    VeryStrong,
    Exceptional,
    HighlyLikely,
}

impl StatusLevel {
    pub const fn label(self) -> &'static str {
        match self {
            StatusLevel::NotEligible => "NOT ELIGIBLE",
            StatusLevel::WeakProfile => "WEAK PROFILE",
            StatusLevel::PartialEb1c => "PARTIAL EB-1C",
            StatusLevel::Potential => "POTENTIAL",
            StatusLevel::OneCriterionShort => "ONE CRITERION SHORT",
            StatusLevel::NeedsJobOffer => "NEEDS JOB OFFER",
            StatusLevel::NeedsExperience => "NEEDS EXPERIENCE",
            StatusLevel::Qualified => "QUALIFIED",
            StatusLevel::VeryStrong => "VERY STRONG",
            StatusLevel::Exceptional => "EXCEPTIONAL",
            StatusLevel::HighlyLikely => "HIGHLY LIKELY",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            StatusLevel::NotEligible => "\u{274c}",
            StatusLevel::WeakProfile => "\u{1f7e0}",
            StatusLevel::PartialEb1c
            | StatusLevel::Potential
            | StatusLevel::OneCriterionShort
            | StatusLevel::NeedsJobOffer
            | StatusLevel::NeedsExperience => "\u{1f7e1}",
            StatusLevel::Qualified
            | StatusLevel::VeryStrong
            | StatusLevel::Exceptional
            | StatusLevel::HighlyLikely => "\u{2705}",
        }
    }

    /// Banner form with the glyph, e.g. `✅ QUALIFIED`.
    pub fn decorated(self) -> String {
        format!("{} {}", self.glyph(), self.label())
    }

    /// True for the levels that mean a petition can be filed today.
    pub const fn is_eligible(self) -> bool {
        matches!(
            self,
            StatusLevel::Qualified
                | StatusLevel::VeryStrong
                | StatusLevel::Exceptional
                | StatusLevel::HighlyLikely
        )
    }
}

/// Short strength tag shown next to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthTag {
    Exceptional,
    VeryStrong,
    Qualified,
    NeedsExperience,
    NeedsJobOffer,
    Borderline,
    Developing,
    Weak,
    Incomplete,
    NotEligible,
}

impl StrengthTag {
    pub const fn label(self) -> &'static str {
        match self {
            StrengthTag::Exceptional => "EXCEPTIONAL",
            StrengthTag::VeryStrong => "VERY STRONG",
            StrengthTag::Qualified => "QUALIFIED",
            StrengthTag::NeedsExperience => "NEEDS EXPERIENCE",
            StrengthTag::NeedsJobOffer => "NEEDS JOB OFFER",
            StrengthTag::Borderline => "BORDERLINE",
            StrengthTag::Developing => "DEVELOPING",
            StrengthTag::Weak => "WEAK",
            StrengthTag::Incomplete => "INCOMPLETE",
            StrengthTag::NotEligible => "NOT ELIGIBLE",
        }
    }
}

/// Display color token. Carries no meaning beyond presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityColor {
    DarkGreen,
    ForestGreen,
    LimeGreen,
    DarkOrange,
    Orange,
    Tomato,
    Crimson,
}

impl SeverityColor {
    pub const fn hex(self) -> &'static str {
        match self {
            SeverityColor::DarkGreen => "#006400",
            SeverityColor::ForestGreen => "#228B22",
            SeverityColor::LimeGreen => "#32CD32",
            SeverityColor::DarkOrange => "#FF8C00",
            SeverityColor::Orange => "#FFA500",
            SeverityColor::Tomato => "#FF6347",
            SeverityColor::Crimson => "#DC143C",
        }
    }
}

/// Result of one classification. Built fresh per call and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    pub rule: RuleId,
    pub category: Category,
    pub status: StatusLevel,
    pub score_label: String,
    pub severity_color: SeverityColor,
    pub title: String,
    pub narrative: String,
    pub recommended_steps: Vec<String>,
    pub strength: StrengthTag,
    pub processing_note: String,
}

impl OutcomeRecord {
    /// One-line summary for logs and CLI listings.
    pub fn summary(&self) -> String {
        format!(
            "{} {} ({}): {}",
            self.category.label(),
            self.status.label(),
            self.score_label,
            self.title
        )
    }
}
