mod bootstrap;

use anyhow::{Context, Result};
use insights_core::settings::Settings;
use insights_data::analysis::run_analysis;
use insights_ui::app::{App, ViewMode};

fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Race Insights v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "View: {}, Theme: {}, Top: {}",
        settings.view,
        settings.theme,
        settings.top
    );

    let data_dir = match settings.data_path.clone() {
        Some(path) => path,
        None => bootstrap::discover_data_dir().context(
            "no dataset directory found; pass --data-path or set F1_DATA_DIR",
        )?,
    };
    tracing::info!("Reading datasets from {}", data_dir.display());

    // The whole analysis runs up front; the TUI only pages through the output.
    let result = run_analysis(&data_dir, settings.top as usize)?;
    tracing::info!(
        "Built {} charts from {} rows in {:.2}s",
        result.metadata.charts_built,
        result.metadata.rows_loaded,
        result.metadata.total_time_seconds
    );

    let view_mode = match settings.view.as_str() {
        "stats" => ViewMode::Stats,
        "charts" => ViewMode::Charts,
        unknown => {
            tracing::warn!("Unknown view mode '{}', defaulting to charts", unknown);
            ViewMode::Charts
        }
    };

    let app = App::new(&settings.theme, view_mode, result);
    app.run()?;

    Ok(())
}
