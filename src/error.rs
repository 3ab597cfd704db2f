//! Error types for the open model exporter.

use thiserror::Error;

/// Result type alias using ExportError.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Main error type for model export operations.
///
/// Compiling never fails on odd geometry or dangling texture references; these
/// errors only come from the boundaries (reading snapshots, writing output).
#[derive(Error, Debug)]
pub enum ExportError {
    /// Failed to parse or produce JSON data.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Project snapshot failed structural validation.
    #[error("Invalid project: {0}")]
    InvalidProject(String),

    /// Failed to hand the compiled model to the persistence layer.
    #[error("Export error: {0}")]
    Export(String),
}
