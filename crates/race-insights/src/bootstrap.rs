use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure the standard `~/.race-insights/` directory hierarchy exists.
///
/// Creates the following directories if absent (including any missing parents):
/// - `~/.race-insights/`
/// - `~/.race-insights/logs/`
pub fn ensure_directories() -> anyhow::Result<()> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let insights_dir = home.join(".race-insights");
    std::fs::create_dir_all(&insights_dir)?;
    std::fs::create_dir_all(insights_dir.join("logs"))?;
    Ok(())
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised.
///
/// Diagnostics go to stderr so the TUI on stdout stays clean.  When
/// `log_file` is set the same output is mirrored to that file without ANSI
/// colours.
pub fn setup_logging(log_level: &str, log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    // Map conventional log-level names to tracing directives (lowercase).
    let upper = log_level.to_uppercase();
    let normalised = match upper.as_str() {
        "DEBUG" | "CRITICAL" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        other => other,
    };

    let filter = EnvFilter::try_new(normalised).unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            let file_layer = fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file));
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(file_layer)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
        }
    }

    Ok(())
}

// ── Data-directory discovery ───────────────────────────────────────────────────

/// Attempt to locate the Formula 1 dataset directory on the local system.
///
/// Checks the following roots in order and returns the first dataset
/// directory found at or under them (a directory qualifies when it contains
/// `results.csv`):
/// 1. `./data/`
/// 2. the current directory
/// 3. `~/f1-data/`
///
/// Returns `None` when no root contains a dataset.
pub fn discover_data_dir() -> Option<PathBuf> {
    let mut candidates = vec![PathBuf::from("data"), PathBuf::from(".")];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join("f1-data"));
    }
    candidates
        .into_iter()
        .filter(|root| root.exists())
        .find_map(|root| insights_data::loader::find_dataset_dir(&root))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
