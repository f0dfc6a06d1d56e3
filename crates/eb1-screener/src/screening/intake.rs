use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::InputError;

use super::domain::{AttributeValue, RawAttributes};

/// Parses a JSON object of intake answers.
pub fn parse_json(body: &str) -> Result<RawAttributes, InputError> {
    Ok(serde_json::from_str(body)?)
}

/// Parses a two-column `key,value` CSV export of intake answers. Later rows win.
pub fn parse_csv<R: Read>(reader: R) -> Result<RawAttributes, InputError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut attributes = RawAttributes::new();

    for record in csv_reader.deserialize::<IntakeRow>() {
        let row = record?;
        attributes.insert(row.key, row.value);
    }

    Ok(attributes)
}

#[derive(Debug, Deserialize)]
struct IntakeRow {
    key: String,
    #[serde(default)]
    value: String,
}

/// Splits a `key=value` override into its parts.
pub fn parse_assignment(raw: &str) -> Result<(String, AttributeValue), InputError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| InputError::Assignment(raw.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(InputError::Assignment(raw.to_string()));
    }

    Ok((key.to_string(), AttributeValue::from(value.trim())))
}

/// Loads a submission from disk, picking the parser from the file extension.
pub fn load_file(path: &Path) -> Result<RawAttributes, InputError> {
    let body = fs::read_to_string(path).map_err(|source| InputError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        parse_csv(body.as_bytes())
    } else {
        parse_json(&body)
    }
}
