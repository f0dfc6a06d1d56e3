mod common;
mod engine;
mod report;
