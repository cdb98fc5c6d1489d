//! CSV dataset discovery and loading for Race Insights.
//!
//! Locates the directory holding the fourteen files of the historical F1
//! export and deserializes each file into the typed record collections from
//! [`insights_core::models`] for downstream processing.

use std::path::{Path, PathBuf};

use insights_core::error::{InsightsError, Result};
use insights_core::models::{
    Circuit, Constructor, ConstructorResult, ConstructorStanding, Driver, DriverStanding, LapTime,
    PitStop, QualifyingResult, Race, ResultRecord, Season, SprintResult, Status,
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

// ── Dataset catalogue ─────────────────────────────────────────────────────────

/// The fourteen dataset files of the export, in load order.
pub const DATASET_FILES: [&str; 14] = [
    "circuits.csv",
    "constructor_results.csv",
    "constructor_standings.csv",
    "constructors.csv",
    "driver_standings.csv",
    "drivers.csv",
    "lap_times.csv",
    "pit_stops.csv",
    "qualifying.csv",
    "races.csv",
    "results.csv",
    "seasons.csv",
    "sprint_results.csv",
    "status.csv",
];

/// The file whose presence marks a directory as the dataset directory.
const MARKER_FILE: &str = "results.csv";

/// Per-file cap on warn-level row diagnostics; further bad rows log at debug.
const ROW_WARN_LIMIT: u64 = 3;

/// Columns a dataset must provide: the required (non-optional) fields of its
/// record type. Optional columns are deliberately absent from these lists.
fn required_columns(file: &str) -> &'static [&'static str] {
    match file {
        "circuits.csv" => &[
            "circuitId",
            "circuitRef",
            "name",
            "location",
            "country",
            "lat",
            "lng",
            "url",
        ],
        "constructor_results.csv" => &["constructorResultsId", "raceId", "constructorId", "points"],
        "constructor_standings.csv" => &[
            "constructorStandingsId",
            "raceId",
            "constructorId",
            "points",
            "position",
            "positionText",
            "wins",
        ],
        "constructors.csv" => &["constructorId", "constructorRef", "name", "nationality", "url"],
        "driver_standings.csv" => &[
            "driverStandingsId",
            "raceId",
            "driverId",
            "points",
            "position",
            "positionText",
            "wins",
        ],
        "drivers.csv" => &[
            "driverId",
            "driverRef",
            "forename",
            "surname",
            "nationality",
            "url",
        ],
        "lap_times.csv" => &["raceId", "driverId", "lap", "position", "time", "milliseconds"],
        "pit_stops.csv" => &[
            "raceId",
            "driverId",
            "stop",
            "lap",
            "time",
            "duration",
            "milliseconds",
        ],
        "qualifying.csv" => &[
            "qualifyId",
            "raceId",
            "driverId",
            "constructorId",
            "number",
            "position",
        ],
        "races.csv" => &["raceId", "year", "round", "circuitId", "name", "date", "url"],
        "results.csv" => &[
            "resultId",
            "raceId",
            "driverId",
            "constructorId",
            "grid",
            "positionText",
            "positionOrder",
            "points",
            "laps",
            "statusId",
        ],
        "seasons.csv" => &["year", "url"],
        "sprint_results.csv" => &[
            "resultId",
            "raceId",
            "driverId",
            "constructorId",
            "number",
            "grid",
            "positionText",
            "positionOrder",
            "points",
            "laps",
            "statusId",
        ],
        "status.csv" => &["statusId", "status"],
        _ => &[],
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// The in-memory working set: one typed collection per dataset file.
#[derive(Debug, Clone, Default)]
pub struct RaceData {
    pub circuits: Vec<Circuit>,
    pub constructor_results: Vec<ConstructorResult>,
    pub constructor_standings: Vec<ConstructorStanding>,
    pub constructors: Vec<Constructor>,
    pub driver_standings: Vec<DriverStanding>,
    pub drivers: Vec<Driver>,
    pub lap_times: Vec<LapTime>,
    pub pit_stops: Vec<PitStop>,
    pub qualifying: Vec<QualifyingResult>,
    pub races: Vec<Race>,
    /// Raw race results; the cleaning stage replaces these with
    /// [`insights_core::models::CleanedResult`] rows for downstream use.
    pub results: Vec<ResultRecord>,
    pub seasons: Vec<Season>,
    pub sprint_results: Vec<SprintResult>,
    pub status: Vec<Status>,
}

impl RaceData {
    /// Total rows loaded across every dataset.
    pub fn total_rows(&self) -> usize {
        self.circuits.len()
            + self.constructor_results.len()
            + self.constructor_standings.len()
            + self.constructors.len()
            + self.driver_standings.len()
            + self.drivers.len()
            + self.lap_times.len()
            + self.pit_stops.len()
            + self.qualifying.len()
            + self.races.len()
            + self.results.len()
            + self.seasons.len()
            + self.sprint_results.len()
            + self.status.len()
    }
}

/// Locate the dataset directory at or under `root`.
///
/// A directory qualifies when it contains `results.csv`. `root` itself is
/// checked first; otherwise a bounded recursive search handles the common
/// case of an archive extracted into a nested folder. The shallowest match
/// wins, ties broken by path order.
pub fn find_dataset_dir(root: &Path) -> Option<PathBuf> {
    if !root.exists() {
        warn!("Data path does not exist: {}", root.display());
        return None;
    }
    if root.join(MARKER_FILE).is_file() {
        return Some(root.to_path_buf());
    }

    let mut candidates: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .max_depth(3)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && entry.file_name() == MARKER_FILE)
        .filter_map(|entry| entry.path().parent().map(Path::to_path_buf))
        .collect();

    candidates.sort_by_key(|p| (p.components().count(), p.clone()));
    candidates.into_iter().next()
}

/// Load all fourteen datasets from `dir` (or a dataset directory nested
/// under it) into a [`RaceData`] working set.
///
/// Any unreadable file or missing required column is a fatal error; rows
/// that fail to deserialize inside a structurally valid file are skipped
/// and counted instead.
pub fn load_race_data(dir: &Path) -> Result<RaceData> {
    if !dir.exists() {
        return Err(InsightsError::DataPathNotFound(dir.to_path_buf()));
    }
    let dataset_dir =
        find_dataset_dir(dir).ok_or_else(|| InsightsError::NoDatasets(dir.to_path_buf()))?;
    debug!("Loading datasets from {}", dataset_dir.display());

    let data = RaceData {
        circuits: read_table(&dataset_dir, "circuits.csv")?,
        constructor_results: read_table(&dataset_dir, "constructor_results.csv")?,
        constructor_standings: read_table(&dataset_dir, "constructor_standings.csv")?,
        constructors: read_table(&dataset_dir, "constructors.csv")?,
        driver_standings: read_table(&dataset_dir, "driver_standings.csv")?,
        drivers: read_table(&dataset_dir, "drivers.csv")?,
        lap_times: read_table(&dataset_dir, "lap_times.csv")?,
        pit_stops: read_table(&dataset_dir, "pit_stops.csv")?,
        qualifying: read_table(&dataset_dir, "qualifying.csv")?,
        races: read_table(&dataset_dir, "races.csv")?,
        results: read_table(&dataset_dir, "results.csv")?,
        seasons: read_table(&dataset_dir, "seasons.csv")?,
        sprint_results: read_table(&dataset_dir, "sprint_results.csv")?,
        status: read_table(&dataset_dir, "status.csv")?,
    };

    debug!(
        "Loaded {} rows across {} datasets",
        data.total_rows(),
        DATASET_FILES.len()
    );
    Ok(data)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Read one dataset file into typed records.
///
/// The header is validated against the record's required columns before any
/// row is touched, so a structurally wrong file fails fast with the dataset
/// and column named.
fn read_table<T: DeserializeOwned>(dataset_dir: &Path, file: &str) -> Result<Vec<T>> {
    let path = dataset_dir.join(file);
    let dataset = file.trim_end_matches(".csv");

    let handle = std::fs::File::open(&path).map_err(|source| InsightsError::FileRead {
        path: path.clone(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(std::io::BufReader::new(handle));

    let headers = reader.headers()?.clone();
    for column in required_columns(file) {
        if !headers.iter().any(|h| h == *column) {
            return Err(InsightsError::MissingColumn {
                dataset: dataset.to_string(),
                column: column.to_string(),
            });
        }
    }

    let mut rows: Vec<T> = Vec::new();
    let mut rows_read = 0u64;
    let mut rows_skipped = 0u64;

    for row_result in reader.deserialize() {
        rows_read += 1;
        match row_result {
            Ok(row) => rows.push(row),
            Err(e) => {
                rows_skipped += 1;
                if rows_skipped <= ROW_WARN_LIMIT {
                    warn!("Skipping bad row in {}: {}", dataset, e);
                } else {
                    debug!("Skipping bad row in {}: {}", dataset, e);
                }
            }
        }
    }

    if rows_skipped > 0 {
        warn!("{}: skipped {} malformed rows", dataset, rows_skipped);
    }
    debug!("{}: {} rows read, {} skipped", dataset, rows_read, rows_skipped);

    Ok(rows)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
