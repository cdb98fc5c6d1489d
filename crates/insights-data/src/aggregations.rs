//! Chart-shaped summaries computed from the loaded datasets.
//!
//! Each builder takes the tables it needs and returns `Some` chart, or `None`
//! after logging a diagnostic when its input is empty. A missing chart never
//! aborts the run; the caller collects whichever charts did build.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use insights_core::models::{
    Circuit, CleanedResult, Constructor, ConstructorStanding, Driver, DriverStanding, Race,
};
use insights_core::stats::{self, ColumnSummary};

// ── Chart types ───────────────────────────────────────────────────────────────

/// One bar of a ranked chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub label: String,
    pub value: f64,
}

/// A descending ranked-bar chart, e.g. top drivers by points.
#[derive(Debug, Clone)]
pub struct RankedChart {
    pub title: String,
    /// What the bars measure, e.g. `"Total Points"`.
    pub value_label: String,
    /// Sorted descending by value, at most `top_n` entries.
    pub entries: Vec<RankedEntry>,
}

/// Frequency of every finishing classification across the cleaned results.
#[derive(Debug, Clone)]
pub struct PositionHistogram {
    pub title: String,
    /// Finishing position → number of results, ascending by position.
    pub counts: BTreeMap<u32, u64>,
}

/// One row of the seasonal points table.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonRow {
    pub year: i32,
    pub constructor: String,
    pub points: f64,
}

/// Constructor points summed per season, in chronological order.
#[derive(Debug, Clone)]
pub struct SeasonalPoints {
    pub title: String,
    pub rows: Vec<SeasonRow>,
}

/// One circuit with its country and coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitLocation {
    pub name: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
}

/// Every known circuit, in dataset order.
#[derive(Debug, Clone)]
pub struct RaceLocations {
    pub title: String,
    pub circuits: Vec<CircuitLocation>,
}

/// A single displayable analysis result.
#[derive(Debug, Clone)]
pub enum Chart {
    Ranked(RankedChart),
    Histogram(PositionHistogram),
    Seasonal(SeasonalPoints),
    Locations(RaceLocations),
}

impl Chart {
    /// Title shown in the pager header.
    pub fn title(&self) -> &str {
        match self {
            Chart::Ranked(chart) => &chart.title,
            Chart::Histogram(chart) => &chart.title,
            Chart::Seasonal(chart) => &chart.title,
            Chart::Locations(chart) => &chart.title,
        }
    }
}

// ── Ranking helpers ───────────────────────────────────────────────────────────

/// Order grouped totals descending by value, ties ascending by key, and keep
/// the first `top_n`.
fn rank_and_truncate<K: Ord>(totals: BTreeMap<K, f64>, top_n: usize) -> Vec<(K, f64)> {
    let mut ranked: Vec<(K, f64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    ranked.truncate(top_n);
    ranked
}

/// Surname for a driver id, with a `#id` placeholder when the drivers table
/// has no matching row.
fn driver_label(surnames: &HashMap<u32, &str>, driver_id: u32) -> String {
    match surnames.get(&driver_id) {
        Some(surname) => (*surname).to_string(),
        None => {
            debug!("No driver record for driverId {driver_id}, labelling as #{driver_id}");
            format!("#{driver_id}")
        }
    }
}

fn surname_index(drivers: &[Driver]) -> HashMap<u32, &str> {
    drivers
        .iter()
        .map(|d| (d.driver_id, d.surname.as_str()))
        .collect()
}

// ── Chart builders ────────────────────────────────────────────────────────────

/// Total standings points per driver, descending.
pub fn top_drivers_by_points(
    standings: &[DriverStanding],
    drivers: &[Driver],
    top_n: usize,
) -> Option<RankedChart> {
    if standings.is_empty() {
        warn!("Driver standings are empty, skipping the top drivers chart");
        return None;
    }

    let mut totals: BTreeMap<u32, f64> = BTreeMap::new();
    for row in standings {
        *totals.entry(row.driver_id).or_default() += row.points;
    }

    let surnames = surname_index(drivers);
    let entries = rank_and_truncate(totals, top_n)
        .into_iter()
        .map(|(driver_id, points)| RankedEntry {
            label: driver_label(&surnames, driver_id),
            value: points,
        })
        .collect();

    Some(RankedChart {
        title: format!("Top {top_n} Drivers by Total Points"),
        value_label: "Total Points".to_string(),
        entries,
    })
}

/// Total standings points per constructor, descending.
///
/// Standings rows whose constructor id has no row in the constructors table
/// carry no usable label and are dropped.
pub fn constructor_performance(
    standings: &[ConstructorStanding],
    constructors: &[Constructor],
    top_n: usize,
) -> Option<RankedChart> {
    if standings.is_empty() || constructors.is_empty() {
        warn!("Constructor standings or constructors are empty, skipping the performance chart");
        return None;
    }

    let names: HashMap<u32, &str> = constructors
        .iter()
        .map(|c| (c.constructor_id, c.name.as_str()))
        .collect();

    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for row in standings {
        match names.get(&row.constructor_id) {
            Some(name) => *totals.entry((*name).to_string()).or_default() += row.points,
            None => debug!(
                "No constructor record for constructorId {}, dropping standings row",
                row.constructor_id
            ),
        }
    }
    if totals.is_empty() {
        warn!("No standings row matched a constructor, skipping the performance chart");
        return None;
    }

    let entries = rank_and_truncate(totals, top_n)
        .into_iter()
        .map(|(label, value)| RankedEntry { label, value })
        .collect();

    Some(RankedChart {
        title: format!("Top {top_n} Constructors Performance Over Time"),
        value_label: "Points".to_string(),
        entries,
    })
}

/// How often each finishing classification occurs in the cleaned results.
pub fn race_position_distribution(cleaned: &[CleanedResult]) -> Option<PositionHistogram> {
    if cleaned.is_empty() {
        warn!("No cleaned results, skipping the race position distribution");
        return None;
    }

    let mut counts: BTreeMap<u32, u64> = BTreeMap::new();
    for row in cleaned {
        *counts.entry(row.position_order).or_default() += 1;
    }

    Some(PositionHistogram {
        title: "Distribution of Race Positions".to_string(),
        counts,
    })
}

/// Results carrying a fastest-lap record, counted per driver.
///
/// Every driver present in the cleaned results groups, so a driver who never
/// set a fastest lap still ranks with a count of zero.
pub fn fastest_laps_by_driver(
    cleaned: &[CleanedResult],
    drivers: &[Driver],
    top_n: usize,
) -> Option<RankedChart> {
    if cleaned.is_empty() || drivers.is_empty() {
        warn!("Results or drivers are empty, skipping the fastest laps chart");
        return None;
    }

    let mut counts: BTreeMap<u32, f64> = BTreeMap::new();
    for row in cleaned {
        let count = counts.entry(row.driver_id).or_default();
        if row.fastest_lap.is_some() {
            *count += 1.0;
        }
    }

    let surnames = surname_index(drivers);
    let entries = rank_and_truncate(counts, top_n)
        .into_iter()
        .map(|(driver_id, count)| RankedEntry {
            label: driver_label(&surnames, driver_id),
            value: count,
        })
        .collect();

    Some(RankedChart {
        title: format!("Top {top_n} Drivers with the Most Fastest Laps"),
        value_label: "Number of Fastest Laps".to_string(),
        entries,
    })
}

/// Most common driver nationalities, descending by frequency.
pub fn driver_nationalities(drivers: &[Driver], top_n: usize) -> Option<RankedChart> {
    if drivers.is_empty() {
        warn!("Drivers table is empty, skipping the nationalities chart");
        return None;
    }

    let mut counts: BTreeMap<String, f64> = BTreeMap::new();
    for driver in drivers {
        *counts.entry(driver.nationality.clone()).or_default() += 1.0;
    }

    let entries = rank_and_truncate(counts, top_n)
        .into_iter()
        .map(|(label, value)| RankedEntry { label, value })
        .collect();

    Some(RankedChart {
        title: format!("Top {top_n} Nationalities of Drivers"),
        value_label: "Drivers".to_string(),
        entries,
    })
}

/// Constructor points summed per season, chronological.
///
/// Result rows are joined to `races` for the season year and to
/// `constructors` for the display name; rows missing either join are skipped.
pub fn seasonal_constructor_points(
    cleaned: &[CleanedResult],
    races: &[Race],
    constructors: &[Constructor],
) -> Option<SeasonalPoints> {
    if cleaned.is_empty() || races.is_empty() || constructors.is_empty() {
        warn!("Results, races or constructors are empty, skipping the seasonal points table");
        return None;
    }

    let years: HashMap<u32, i32> = races.iter().map(|r| (r.race_id, r.year)).collect();
    let names: HashMap<u32, &str> = constructors
        .iter()
        .map(|c| (c.constructor_id, c.name.as_str()))
        .collect();

    let mut totals: BTreeMap<(i32, String), f64> = BTreeMap::new();
    for row in cleaned {
        let (Some(year), Some(name)) = (years.get(&row.race_id), names.get(&row.constructor_id))
        else {
            debug!(
                "Result for raceId {} / constructorId {} misses a join, skipping",
                row.race_id, row.constructor_id
            );
            continue;
        };
        *totals.entry((*year, (*name).to_string())).or_default() += row.points;
    }
    if totals.is_empty() {
        warn!("No result joined to races and constructors, skipping the seasonal points table");
        return None;
    }

    let rows = totals
        .into_iter()
        .map(|((year, constructor), points)| SeasonRow {
            year,
            constructor,
            points,
        })
        .collect();

    Some(SeasonalPoints {
        title: "Constructor Points Over Seasons".to_string(),
        rows,
    })
}

/// Every circuit with its country and coordinates, in dataset order.
pub fn race_locations(circuits: &[Circuit]) -> Option<RaceLocations> {
    if circuits.is_empty() {
        warn!("Circuits table is empty, skipping the race locations table");
        return None;
    }

    let circuits = circuits
        .iter()
        .map(|c| CircuitLocation {
            name: c.name.clone(),
            country: c.country.clone(),
            lat: c.lat,
            lng: c.lng,
        })
        .collect();

    Some(RaceLocations {
        title: "Race Locations on the Map".to_string(),
        circuits,
    })
}

// ── Standings summary ─────────────────────────────────────────────────────────

/// Descriptive statistics over the numeric driver-standings columns.
pub fn standings_summary(standings: &[DriverStanding]) -> Option<Vec<ColumnSummary>> {
    if standings.is_empty() {
        warn!("Driver standings are empty, skipping the standings summary");
        return None;
    }

    let points: Vec<f64> = standings.iter().map(|s| s.points).collect();
    let positions: Vec<f64> = standings.iter().map(|s| f64::from(s.position)).collect();
    let wins: Vec<f64> = standings.iter().map(|s| f64::from(s.wins)).collect();

    let summaries = [
        stats::summarize("points", &points),
        stats::summarize("position", &positions),
        stats::summarize("wins", &wins),
    ]
    .into_iter()
    .flatten()
    .collect();

    Some(summaries)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
