//! Error types for the gv-cli application layer.

use std::path::PathBuf;

/// Errors raised while loading inputs or writing output.
///
/// The graph model itself never fails; everything here comes from the
/// file system, the view file format, or the output stream.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read edge list: {path}")]
    EdgeListRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read view file: {path}")]
    ViewFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid view file {path}: {source}")]
    ViewFormat {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for gv-cli operations.
pub type CliResult<T> = Result<T, CliError>;
