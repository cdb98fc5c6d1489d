//! The synchronous batch pipeline: load, clean, aggregate.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use insights_core::error::Result;
use insights_core::stats::ColumnSummary;

use crate::aggregations::{self, Chart};
use crate::cleaning;
use crate::loader;

// ── AnalysisMetadata ──────────────────────────────────────────────────────────

/// Run-level bookkeeping captured alongside the charts.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisMetadata {
    /// When the analysis ran (UTC).
    pub generated_at: DateTime<Utc>,
    /// Directory the datasets were read from.
    pub data_dir: PathBuf,
    /// Rows loaded across all fourteen datasets.
    pub rows_loaded: usize,
    /// Results rows before cleaning.
    pub results_rows_in: usize,
    /// Results rows surviving cleaning.
    pub results_rows_kept: usize,
    /// Results rows dropped for an unusable race time.
    pub results_rows_dropped: usize,
    /// Charts that produced data.
    pub charts_built: usize,
    pub load_time_seconds: f64,
    pub total_time_seconds: f64,
}

// ── AnalysisResult ────────────────────────────────────────────────────────────

/// Everything the presentation layer needs for one run.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Charts that produced data, in build order.
    pub charts: Vec<Chart>,
    pub standings_summary: Option<Vec<ColumnSummary>>,
    pub metadata: AnalysisMetadata,
}

/// Load every dataset under `data_dir`, clean the results, and build all
/// charts plus the standings summary.
///
/// A chart whose input is empty is skipped after logging its own diagnostic;
/// only a dataset that fails to load aborts the run.
pub fn run_analysis(data_dir: &Path, top_n: usize) -> Result<AnalysisResult> {
    let started = Instant::now();

    let data = loader::load_race_data(data_dir)?;
    let load_time_seconds = started.elapsed().as_secs_f64();
    info!(
        "Loaded {} rows from {}",
        data.total_rows(),
        data_dir.display()
    );

    let (cleaned, report) = cleaning::clean_results(&data.results);

    let charts: Vec<Chart> = [
        aggregations::top_drivers_by_points(&data.driver_standings, &data.drivers, top_n)
            .map(Chart::Ranked),
        aggregations::constructor_performance(&data.constructor_standings, &data.constructors, top_n)
            .map(Chart::Ranked),
        aggregations::race_position_distribution(&cleaned).map(Chart::Histogram),
        aggregations::fastest_laps_by_driver(&cleaned, &data.drivers, top_n).map(Chart::Ranked),
        aggregations::driver_nationalities(&data.drivers, top_n).map(Chart::Ranked),
        aggregations::seasonal_constructor_points(&cleaned, &data.races, &data.constructors)
            .map(Chart::Seasonal),
        aggregations::race_locations(&data.circuits).map(Chart::Locations),
    ]
    .into_iter()
    .flatten()
    .collect();

    let standings_summary = aggregations::standings_summary(&data.driver_standings);

    let metadata = AnalysisMetadata {
        generated_at: Utc::now(),
        data_dir: data_dir.to_path_buf(),
        rows_loaded: data.total_rows(),
        results_rows_in: report.rows_in,
        results_rows_kept: report.rows_kept,
        results_rows_dropped: report.rows_dropped,
        charts_built: charts.len(),
        load_time_seconds,
        total_time_seconds: started.elapsed().as_secs_f64(),
    };
    debug!(
        "Analysis complete: {} charts in {:.3}s",
        metadata.charts_built, metadata.total_time_seconds
    );

    Ok(AnalysisResult {
        charts,
        standings_summary,
        metadata,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use insights_core::error::InsightsError;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_csv(dir: &Path, name: &str, contents: &str) {
        let mut file = std::fs::File::create(dir.join(name)).unwrap();
        write!(file, "{}", contents).unwrap();
    }

    /// A complete fourteen-file dataset; the results hold one row per time
    /// shape plus one unparseable row the cleaning stage drops.
    fn write_fixture(dir: &Path) {
        write_csv(
            dir,
            "circuits.csv",
            "circuitId,circuitRef,name,location,country,lat,lng,alt,url\n\
             1,albert_park,Albert Park,Melbourne,Australia,-37.8497,144.968,10,http://example.test/ap\n",
        );
        write_csv(
            dir,
            "constructor_results.csv",
            "constructorResultsId,raceId,constructorId,points,status\n\
             1,18,1,14,\\N\n",
        );
        write_csv(
            dir,
            "constructor_standings.csv",
            "constructorStandingsId,raceId,constructorId,points,position,positionText,wins\n\
             1,18,1,14,1,1,1\n\
             2,18,2,8,3,3,0\n",
        );
        write_csv(
            dir,
            "constructors.csv",
            "constructorId,constructorRef,name,nationality,url\n\
             1,mclaren,McLaren,British,http://example.test/mclaren\n\
             2,ferrari,Ferrari,Italian,http://example.test/ferrari\n",
        );
        write_csv(
            dir,
            "driver_standings.csv",
            "driverStandingsId,raceId,driverId,points,position,positionText,wins\n\
             1,18,1,10,1,1,1\n\
             2,18,2,8,2,2,0\n",
        );
        write_csv(
            dir,
            "drivers.csv",
            "driverId,driverRef,number,code,forename,surname,dob,nationality,url\n\
             1,hamilton,44,HAM,Lewis,Hamilton,1985-01-07,British,http://example.test/ham\n\
             2,raikkonen,7,RAI,Kimi,Raikkonen,1979-10-17,Finnish,http://example.test/rai\n",
        );
        write_csv(
            dir,
            "lap_times.csv",
            "raceId,driverId,lap,position,time,milliseconds\n\
             18,1,1,1,1:34.494,94494\n",
        );
        write_csv(
            dir,
            "pit_stops.csv",
            "raceId,driverId,stop,lap,time,duration,milliseconds\n\
             18,1,1,17,17:28:24,23.227,23227\n",
        );
        write_csv(
            dir,
            "qualifying.csv",
            "qualifyId,raceId,driverId,constructorId,number,position,q1,q2,q3\n\
             1,18,1,1,22,1,1:26.572,1:25.187,1:26.714\n",
        );
        write_csv(
            dir,
            "races.csv",
            "raceId,year,round,circuitId,name,date,time,url\n\
             18,2008,1,1,Australian Grand Prix,2008-03-16,04:30:00,http://example.test/aus\n",
        );
        write_csv(
            dir,
            "results.csv",
            "resultId,raceId,driverId,constructorId,number,grid,position,positionText,positionOrder,points,laps,time,milliseconds,fastestLap,rank,fastestLapTime,fastestLapSpeed,statusId\n\
             1,18,1,1,22,1,1,1,1,10,58,94min 50.616s,5690616,39,2,1:27.452,218.3,1\n\
             2,18,2,2,3,2,2,2,2,8,58,5.478s,5696094,41,3,1:27.739,217.586,1\n\
             3,18,1,1,22,3,\\N,R,3,0,30,DNF,\\N,\\N,\\N,\\N,\\N,4\n",
        );
        write_csv(dir, "seasons.csv", "year,url\n2008,http://example.test/2008\n");
        write_csv(
            dir,
            "sprint_results.csv",
            "resultId,raceId,driverId,constructorId,number,grid,position,positionText,positionOrder,points,laps,time,milliseconds,fastestLap,fastestLapTime,statusId\n\
             1,1061,1,1,44,1,1,1,1,3,17,25:38.426,1538426,14,1:30.013,1\n",
        );
        write_csv(dir, "status.csv", "statusId,status\n1,Finished\n");
    }

    // ── run_analysis ──────────────────────────────────────────────────────────

    #[test]
    fn test_run_analysis_builds_every_chart() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());

        let result = run_analysis(dir.path(), 10).unwrap();

        let titles: Vec<&str> = result.charts.iter().map(|c| c.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Top 10 Drivers by Total Points",
                "Top 10 Constructors Performance Over Time",
                "Distribution of Race Positions",
                "Top 10 Drivers with the Most Fastest Laps",
                "Top 10 Nationalities of Drivers",
                "Constructor Points Over Seasons",
                "Race Locations on the Map",
            ]
        );
        assert_eq!(result.metadata.charts_built, 7);
    }

    #[test]
    fn test_run_analysis_counts_cleaning_stages() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());

        let result = run_analysis(dir.path(), 10).unwrap();

        assert_eq!(result.metadata.rows_loaded, 20);
        assert_eq!(result.metadata.results_rows_in, 3);
        assert_eq!(result.metadata.results_rows_kept, 2);
        assert_eq!(result.metadata.results_rows_dropped, 1);
        assert_eq!(result.metadata.data_dir, dir.path());
    }

    #[test]
    fn test_run_analysis_standings_summary_present() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());

        let result = run_analysis(dir.path(), 10).unwrap();

        let summary = result.standings_summary.unwrap();
        let columns: Vec<&str> = summary.iter().map(|s| s.column.as_str()).collect();
        assert_eq!(columns, vec!["points", "position", "wins"]);
        assert_eq!(summary[0].count, 2);
    }

    #[test]
    fn test_run_analysis_honors_top_n() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());

        let result = run_analysis(dir.path(), 1).unwrap();

        match &result.charts[0] {
            Chart::Ranked(chart) => {
                assert_eq!(chart.title, "Top 1 Drivers by Total Points");
                assert_eq!(chart.entries.len(), 1);
                assert_eq!(chart.entries[0].label, "Hamilton");
            }
            other => panic!("expected a ranked chart, got {other:?}"),
        }
    }

    #[test]
    fn test_run_analysis_empty_results_keep_other_charts() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());
        write_csv(
            dir.path(),
            "results.csv",
            "resultId,raceId,driverId,constructorId,number,grid,position,positionText,positionOrder,points,laps,time,milliseconds,fastestLap,rank,fastestLapTime,fastestLapSpeed,statusId\n",
        );

        let result = run_analysis(dir.path(), 10).unwrap();

        // The three results-driven charts drop out; the other four survive.
        let titles: Vec<&str> = result.charts.iter().map(|c| c.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Top 10 Drivers by Total Points",
                "Top 10 Constructors Performance Over Time",
                "Top 10 Nationalities of Drivers",
                "Race Locations on the Map",
            ]
        );
        assert_eq!(result.metadata.results_rows_in, 0);
        assert!(result.standings_summary.is_some());
    }

    #[test]
    fn test_run_analysis_missing_dir_fails() {
        let err = run_analysis(Path::new("/tmp/does-not-exist-insights-test-xyz"), 10).unwrap_err();
        assert!(matches!(err, InsightsError::DataPathNotFound(_)));
    }

    #[test]
    fn test_run_analysis_metadata_timings() {
        let dir = TempDir::new().unwrap();
        write_fixture(dir.path());

        let result = run_analysis(dir.path(), 10).unwrap();

        assert!(result.metadata.load_time_seconds >= 0.0);
        assert!(result.metadata.total_time_seconds >= result.metadata.load_time_seconds);
    }
}
