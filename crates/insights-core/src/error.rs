use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the race data pipeline.
#[derive(Error, Debug)]
pub enum InsightsError {
    /// A dataset file could not be opened or read from disk.
    #[error("Failed to read dataset file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dataset file is not structurally valid CSV.
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A dataset header is missing a column the record type requires.
    #[error("Dataset '{dataset}' is missing required column '{column}'")]
    MissingColumn { dataset: String, column: String },

    /// The expected data directory does not exist.
    #[error("Data path not found: {0}")]
    DataPathNotFound(PathBuf),

    /// No dataset CSV files were found under the given directory.
    #[error("No dataset files found in {0}")]
    NoDatasets(PathBuf),

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the insights crates.
pub type Result<T> = std::result::Result<T, InsightsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = InsightsError::FileRead {
            path: PathBuf::from("/some/results.csv"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read dataset file"));
        assert!(msg.contains("/some/results.csv"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_missing_column() {
        let err = InsightsError::MissingColumn {
            dataset: "results".to_string(),
            column: "positionOrder".to_string(),
        };
        let msg = err.to_string();
        assert_eq!(
            msg,
            "Dataset 'results' is missing required column 'positionOrder'"
        );
    }

    #[test]
    fn test_error_display_data_path_not_found() {
        let err = InsightsError::DataPathNotFound(PathBuf::from("/missing/dir"));
        let msg = err.to_string();
        assert_eq!(msg, "Data path not found: /missing/dir");
    }

    #[test]
    fn test_error_display_no_datasets() {
        let err = InsightsError::NoDatasets(PathBuf::from("/empty/dir"));
        let msg = err.to_string();
        assert_eq!(msg, "No dataset files found in /empty/dir");
    }

    #[test]
    fn test_error_display_terminal() {
        let err = InsightsError::Terminal("crossterm failure".to_string());
        let msg = err.to_string();
        assert_eq!(msg, "Terminal error: crossterm failure");
    }

    #[test]
    fn test_error_display_config() {
        let err = InsightsError::Config("bad theme name".to_string());
        let msg = err.to_string();
        assert_eq!(msg, "Configuration error: bad theme name");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: InsightsError = io_err.into();
        let msg = err.to_string();
        assert!(msg.contains("denied"));
    }
}
