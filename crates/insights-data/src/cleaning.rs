//! Results-table cleaning.
//!
//! Normalizes the free-text `time` column of the results table into
//! canonical seconds and drops the rows whose value has no recognized
//! shape, producing the cleaned table every downstream aggregation
//! consumes in place of the raw one.

use insights_core::models::{CleanedResult, ResultRecord};
use insights_core::race_time;
use tracing::debug;

/// Row counts from one cleaning pass over the results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanReport {
    pub rows_in: usize,
    pub rows_kept: usize,
    pub rows_dropped: usize,
}

/// Clean the results table.
///
/// Each row's raw `time` text goes through the shape parser; rows whose
/// value is absent or unparseable are dropped. Failures are isolated per
/// row: one bad value drops that row alone and the rest of the table is
/// unaffected.
pub fn clean_results(raw: &[ResultRecord]) -> (Vec<CleanedResult>, CleanReport) {
    let mut cleaned: Vec<CleanedResult> = Vec::with_capacity(raw.len());

    for record in raw {
        let Some(time_seconds) = record.time.as_deref().and_then(race_time::parse_seconds) else {
            continue;
        };
        cleaned.push(CleanedResult {
            race_id: record.race_id,
            driver_id: record.driver_id,
            constructor_id: record.constructor_id,
            points: record.points,
            position_order: record.position_order,
            fastest_lap: record.fastest_lap,
            time_seconds,
        });
    }

    let report = CleanReport {
        rows_in: raw.len(),
        rows_kept: cleaned.len(),
        rows_dropped: raw.len() - cleaned.len(),
    };
    debug!(
        "Cleaned results: {} in, {} kept, {} dropped",
        report.rows_in, report.rows_kept, report.rows_dropped
    );

    (cleaned, report)
}
