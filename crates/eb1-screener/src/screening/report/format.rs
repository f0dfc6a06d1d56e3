use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

use super::super::domain::{
    Answer, AttributeKey, AttributeKind, AttributeValue, Experience, FlagReading,
};

/// Serialized forms a report can be emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
}

impl FromStr for ReportFormat {
    type Err = InputError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" | "narrative" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(InputError::Format(value.to_string())),
        }
    }
}

impl ReportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    pub fn mime(self) -> mime::Mime {
        match self {
            Self::Text => mime::TEXT_PLAIN_UTF_8,
            Self::Json => mime::APPLICATION_JSON,
            Self::Csv => mime::TEXT_CSV_UTF_8,
        }
    }
}

/// Human-readable answer for `key`. Absent values render as the not-met default and values
/// that cannot be read for the key render as their literal text.
pub fn format_value(key: AttributeKey, value: Option<&AttributeValue>) -> String {
    match key.kind() {
        AttributeKind::Flag => match value.map(FlagReading::from_value) {
            None | Some(FlagReading::Set(false)) => "No".to_string(),
            Some(FlagReading::Set(true)) => "Yes".to_string(),
            Some(FlagReading::Unrecognized(raw)) => raw,
        },
        AttributeKind::Experience => {
            match value.map(Experience::from_value).unwrap_or_default() {
                Experience::ThreeYears => "3+ years".to_string(),
                Experience::UnderThreeYears => "Less than 3 years".to_string(),
                Experience::Unrecognized(raw) => raw,
            }
        }
        AttributeKind::Answer => match value.map(Answer::from_value).unwrap_or_default() {
            Answer::Yes => "Yes".to_string(),
            Answer::No => "No".to_string(),
            Answer::Unrecognized(raw) => raw,
        },
    }
}

/// Drops emoji and other pictographs, keeping letters, digits and ASCII punctuation.
pub fn strip_decorations(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii() || c.is_alphanumeric() || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booleans_render_yes_and_no() {
        let yes = AttributeValue::Flag(true);
        assert_eq!(format_value(AttributeKey::Judging, Some(&yes)), "Yes");
        assert_eq!(format_value(AttributeKey::Judging, None), "No");
    }

    #[test]
    fn experience_renders_its_bands() {
        let met = AttributeValue::from("3_years");
        let legacy = AttributeValue::from("<3_years");
        assert_eq!(format_value(AttributeKey::Experience, Some(&met)), "3+ years");
        assert_eq!(
            format_value(AttributeKey::Experience, Some(&legacy)),
            "Less than 3 years"
        );
        assert_eq!(
            format_value(AttributeKey::Experience, None),
            "Less than 3 years"
        );
    }

    #[test]
    fn unrecognized_values_render_literally() {
        let pending = AttributeValue::from("pending");
        assert_eq!(format_value(AttributeKey::Transfer, Some(&pending)), "pending");
        assert_eq!(format_value(AttributeKey::Authorship, Some(&pending)), "pending");
        assert_eq!(
            format_value(AttributeKey::Experience, Some(&AttributeValue::Flag(true))),
            "true"
        );
    }

    #[test]
    fn strips_status_glyphs() {
        assert_eq!(strip_decorations("\u{2705} QUALIFIED"), "QUALIFIED");
        assert_eq!(strip_decorations("\u{1f7e1} PARTIAL EB-1C"), "PARTIAL EB-1C");
        assert_eq!(strip_decorations("EB-1A/EB-1B"), "EB-1A/EB-1B");
    }
}
