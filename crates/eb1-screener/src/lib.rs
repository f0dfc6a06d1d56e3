//! Eligibility screening for the three EB-1 subcategories.
//!
//! The [`screening`] module holds the pure classification core; `config`, `telemetry` and
//! `error` carry the service plumbing shared with the API binary.

pub mod config;
pub mod error;
pub mod screening;
pub mod telemetry;
