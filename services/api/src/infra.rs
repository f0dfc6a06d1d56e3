use chrono::NaiveDate;
use eb1_screener::error::InputError;
use eb1_screener::screening::intake;
use eb1_screener::screening::{AttributeValue, RawAttributes, ReportFormat};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_format(raw: &str) -> Result<ReportFormat, InputError> {
    raw.parse()
}

pub(crate) fn parse_override(raw: &str) -> Result<(String, AttributeValue), InputError> {
    intake::parse_assignment(raw)
}

/// Reads the optional submission file, then applies `--set` overrides in order.
pub(crate) fn load_submission(
    input: Option<&Path>,
    overrides: &[(String, AttributeValue)],
) -> Result<RawAttributes, InputError> {
    let mut raw = match input {
        Some(path) => intake::load_file(path)?,
        None => RawAttributes::new(),
    };

    for (key, value) in overrides {
        debug!(%key, value = %value.literal(), "applying submission override");
        raw.insert(key.clone(), value.clone());
    }

    Ok(raw)
}
