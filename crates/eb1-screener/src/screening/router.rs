use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::AppError;

use super::domain::{CanonicalAttributes, RawAttributes};
use super::engine::CriteriaCounters;
use super::outcome::OutcomeRecord;
use super::report::{self, LabelTable, ReportFormat, StructuredReport};
use super::screen;

/// Response body for a screening request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningResponse {
    pub canonical: CanonicalAttributes,
    pub counters: CriteriaCounters,
    pub outcome: OutcomeRecord,
    pub report: StructuredReport,
}

/// Router builder exposing the screening endpoints.
pub fn screening_router(labels: Arc<LabelTable>) -> Router {
    Router::new()
        .route("/api/v1/eligibility/screen", post(screen_handler))
        .route("/api/v1/eligibility/report/:format", post(report_handler))
        .route("/api/v1/eligibility/labels", get(labels_handler))
        .with_state(labels)
}

pub(crate) async fn screen_handler(
    State(labels): State<Arc<LabelTable>>,
    Json(raw): Json<RawAttributes>,
) -> Json<ScreeningResponse> {
    let screening = screen(&raw);
    let report = report::to_structured_report(&screening.canonical, &screening.outcome, &labels);

    Json(ScreeningResponse {
        canonical: screening.canonical,
        counters: screening.counters,
        outcome: screening.outcome,
        report,
    })
}

pub(crate) async fn report_handler(
    State(labels): State<Arc<LabelTable>>,
    Path(format): Path<String>,
    Json(raw): Json<RawAttributes>,
) -> Result<Response, AppError> {
    let report_format = format.parse::<ReportFormat>().map_err(|err| {
        warn!(%format, "unsupported report format requested");
        err
    })?;

    let screening = screen(&raw);
    let body = report::render(
        report_format,
        &screening.canonical,
        &screening.outcome,
        &labels,
    )?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, report_format.mime().to_string())],
        body,
    )
        .into_response())
}

pub(crate) async fn labels_handler(State(labels): State<Arc<LabelTable>>) -> Json<LabelTable> {
    Json(labels.as_ref().clone())
}
