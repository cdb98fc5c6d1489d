//! Core domain layer for Race Insights.
//!
//! Holds the typed records for the fourteen F1 dataset files, the race-time
//! shape parser, descriptive statistics, CLI settings with last-used
//! persistence, error types and display formatting shared by every other
//! crate in the workspace.

pub mod error;
pub mod formatting;
pub mod models;
pub mod race_time;
pub mod settings;
pub mod stats;
