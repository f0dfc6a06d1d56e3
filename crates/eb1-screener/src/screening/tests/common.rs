use std::sync::Arc;

use axum::response::Response;
use axum::Router;
use serde_json::Value;

use crate::screening::domain::{AttributeKey, CanonicalAttributes, RawAttributes};
use crate::screening::outcome::OutcomeRecord;
use crate::screening::report::LabelTable;
use crate::screening::{screen, screening_router};

pub(super) fn labels() -> LabelTable {
    LabelTable::standard()
}

pub(super) fn router() -> Router {
    screening_router(Arc::new(labels()))
}

/// Submission with every listed flag set to true.
pub(super) fn flags(keys: &[AttributeKey]) -> RawAttributes {
    keys.iter().map(|key| (key.as_str(), true)).collect()
}

/// Category-B prerequisites: three years of experience and a qualifying offer.
pub(super) fn eb1b_basics() -> RawAttributes {
    RawAttributes::new()
        .with("experience", "3_years")
        .with("offer", "yes")
}

pub(super) fn extend(mut raw: RawAttributes, keys: &[AttributeKey]) -> RawAttributes {
    for key in keys {
        raw.insert(key.as_str(), true);
    }
    raw
}

pub(super) fn classified(raw: &RawAttributes) -> (CanonicalAttributes, OutcomeRecord) {
    let screening = screen(raw);
    (screening.canonical, screening.outcome)
}

pub(super) fn outcome_for(raw: &RawAttributes) -> OutcomeRecord {
    screen(raw).outcome
}

pub(super) fn qualified_eb1a() -> RawAttributes {
    flags(&[
        AttributeKey::Publications,
        AttributeKey::Judging,
        AttributeKey::HighSalary,
    ])
}

pub(super) async fn read_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    serde_json::from_str(&read_body(response).await).expect("json payload")
}
