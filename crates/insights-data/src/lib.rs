//! Data layer for Race Insights.
//!
//! Responsible for discovering and reading the CSV dataset files, normalizing
//! the inconsistent race-time column, computing the chart aggregations and
//! running the top-level analysis pipeline.

pub mod aggregations;
pub mod analysis;
pub mod cleaning;
pub mod loader;

pub use insights_core as core;
