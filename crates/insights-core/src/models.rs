use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a CSV field that uses `\N` (or an empty string) as its null
/// marker.
///
/// The historical F1 export writes literal `\N` into columns with no value,
/// which the plain serde derive would reject. Any other content is parsed
/// with the target type's `FromStr`; garbage is a row-level error, not a
/// silent `None`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = String::deserialize(deserializer)?;
    match raw.as_str() {
        "" | "\\N" => Ok(None),
        other => other.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}

/// One row of `circuits.csv`: a Grand Prix venue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circuit {
    /// Unique circuit identifier.
    pub circuit_id: u32,
    /// Short reference slug, e.g. `"monza"`.
    pub circuit_ref: String,
    /// Full circuit name.
    pub name: String,
    /// City or locality.
    pub location: String,
    /// Country the circuit is in.
    pub country: String,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
    /// Altitude in metres, when recorded.
    #[serde(default, deserialize_with = "nullable")]
    pub alt: Option<i32>,
    pub url: String,
}

/// One row of `constructor_results.csv`: a constructor's points haul at a
/// single race.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorResult {
    pub constructor_results_id: u32,
    pub race_id: u32,
    pub constructor_id: u32,
    pub points: f64,
    /// Disqualification marker (`"D"`) on the rare rows that carry one.
    #[serde(default, deserialize_with = "nullable")]
    pub status: Option<String>,
}

/// One row of `constructor_standings.csv`: a constructor's cumulative
/// championship state after a given race.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorStanding {
    pub constructor_standings_id: u32,
    pub race_id: u32,
    pub constructor_id: u32,
    /// Cumulative championship points at this race.
    pub points: f64,
    pub position: u32,
    /// Display form of the position (`"1"`, `"E"`, ...).
    pub position_text: String,
    /// Cumulative race wins at this point of the season.
    pub wins: u32,
}

/// One row of `constructors.csv`: a constructor (team).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constructor {
    pub constructor_id: u32,
    pub constructor_ref: String,
    /// Display name, e.g. `"Ferrari"`.
    pub name: String,
    pub nationality: String,
    pub url: String,
}

/// One row of `driver_standings.csv`: a driver's cumulative championship
/// state after a given race.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverStanding {
    pub driver_standings_id: u32,
    pub race_id: u32,
    pub driver_id: u32,
    /// Cumulative championship points at this race.
    pub points: f64,
    pub position: u32,
    pub position_text: String,
    /// Cumulative race wins at this point of the season.
    pub wins: u32,
}

/// One row of `drivers.csv`: a driver who started at least one Grand Prix.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    /// Unique driver identifier.
    pub driver_id: u32,
    /// Short reference slug, e.g. `"hamilton"`.
    pub driver_ref: String,
    /// Permanent car number, for seasons that had them.
    #[serde(default, deserialize_with = "nullable")]
    pub number: Option<u32>,
    /// Three-letter broadcast code, e.g. `"HAM"`.
    #[serde(default, deserialize_with = "nullable")]
    pub code: Option<String>,
    /// Given name.
    pub forename: String,
    /// Family name, used as the chart label.
    pub surname: String,
    /// Date of birth, when recorded.
    #[serde(default, deserialize_with = "nullable")]
    pub dob: Option<NaiveDate>,
    pub nationality: String,
    pub url: String,
}

/// One row of `lap_times.csv`: a single timed lap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LapTime {
    pub race_id: u32,
    pub driver_id: u32,
    pub lap: u32,
    pub position: u32,
    /// Lap time as displayed, `"1:26.572"`.
    pub time: String,
    pub milliseconds: u64,
}

/// One row of `pit_stops.csv`: a single pit stop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitStop {
    pub race_id: u32,
    pub driver_id: u32,
    /// Stop number within the race for this driver.
    pub stop: u32,
    pub lap: u32,
    /// Local time of day of the stop.
    pub time: String,
    /// Stationary duration as displayed.
    pub duration: String,
    pub milliseconds: u64,
}

/// One row of `qualifying.csv`: a driver's qualifying session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualifyingResult {
    pub qualify_id: u32,
    pub race_id: u32,
    pub driver_id: u32,
    pub constructor_id: u32,
    pub number: u32,
    pub position: u32,
    /// Q1 lap time, absent when the session was not run or not set.
    #[serde(default, deserialize_with = "nullable")]
    pub q1: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub q2: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub q3: Option<String>,
}

/// One row of `races.csv`: a Grand Prix event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    /// Unique race identifier, the join key used throughout.
    pub race_id: u32,
    /// Championship season the race belongs to.
    pub year: i32,
    /// Round number within the season.
    pub round: u32,
    pub circuit_id: u32,
    /// Event name, e.g. `"Monaco Grand Prix"`.
    pub name: String,
    /// Race date.
    pub date: NaiveDate,
    /// Scheduled start time of day, when recorded.
    #[serde(default, deserialize_with = "nullable")]
    pub time: Option<String>,
    pub url: String,
}

/// One row of `results.csv` exactly as loaded, before cleaning.
///
/// The `time` column is free text in several inconsistent shapes; cleaning
/// normalizes it into [`CleanedResult::time_seconds`] and drops rows whose
/// value has no recognized shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    /// Unique result identifier.
    pub result_id: u32,
    pub race_id: u32,
    pub driver_id: u32,
    pub constructor_id: u32,
    /// Car number, absent on a handful of historical rows.
    #[serde(default, deserialize_with = "nullable")]
    pub number: Option<u32>,
    /// Grid slot the driver started from (0 = pit lane).
    pub grid: u32,
    /// Finishing position, absent for non-classified results.
    #[serde(default, deserialize_with = "nullable")]
    pub position: Option<u32>,
    /// Display form of the position (`"1"`, `"R"`, `"DSQ"`, ...).
    pub position_text: String,
    /// Dense finishing order including non-classified cars; never absent.
    pub position_order: u32,
    /// Championship points scored at this race.
    pub points: f64,
    /// Laps completed.
    pub laps: u32,
    /// Raw race-time text, the cleaning stage's input.
    #[serde(default, deserialize_with = "nullable")]
    pub time: Option<String>,
    /// Total race time in milliseconds, winners and lapped leaders only.
    #[serde(default, deserialize_with = "nullable")]
    pub milliseconds: Option<u64>,
    /// Lap number of the driver's fastest lap, when one was set.
    #[serde(default, deserialize_with = "nullable")]
    pub fastest_lap: Option<u32>,
    /// Fastest-lap ranking within the race.
    #[serde(default, deserialize_with = "nullable")]
    pub rank: Option<u32>,
    /// Fastest lap time as displayed.
    #[serde(default, deserialize_with = "nullable")]
    pub fastest_lap_time: Option<String>,
    /// Fastest lap average speed in km/h.
    #[serde(default, deserialize_with = "nullable")]
    pub fastest_lap_speed: Option<f64>,
    /// Finishing status identifier, joins `status.csv`.
    pub status_id: u32,
}

/// One row of `seasons.csv`: a championship year.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub year: i32,
    pub url: String,
}

/// One row of `sprint_results.csv`: a sprint-race classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintResult {
    pub result_id: u32,
    pub race_id: u32,
    pub driver_id: u32,
    pub constructor_id: u32,
    pub number: u32,
    pub grid: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub position: Option<u32>,
    pub position_text: String,
    pub position_order: u32,
    pub points: f64,
    pub laps: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub milliseconds: Option<u64>,
    #[serde(default, deserialize_with = "nullable")]
    pub fastest_lap: Option<u32>,
    #[serde(default, deserialize_with = "nullable")]
    pub fastest_lap_time: Option<String>,
    pub status_id: u32,
}

/// One row of `status.csv`: a finishing-status lookup entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub status_id: u32,
    /// Human-readable status, e.g. `"Finished"`, `"Engine"`.
    pub status: String,
}

/// A race result after cleaning: the raw `time` text has been normalized
/// into canonical seconds and rows without a recognized time are gone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedResult {
    pub race_id: u32,
    pub driver_id: u32,
    pub constructor_id: u32,
    /// Championship points scored at this race.
    pub points: f64,
    /// Dense finishing order including non-classified cars.
    pub position_order: u32,
    /// Lap number of the driver's fastest lap, when one was set.
    pub fastest_lap: Option<u32>,
    /// Canonical race time in seconds. Always a valid number after cleaning.
    pub time_seconds: f64,
}

impl CleanedResult {
    /// Whether this result carries a fastest-lap record.
    pub fn has_fastest_lap(&self) -> bool {
        self.fastest_lap.is_some()
    }
}
