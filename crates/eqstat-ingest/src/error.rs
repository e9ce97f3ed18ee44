//! Error types for dataset ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a CSV dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file {} is {size} bytes, exceeding the {max_size} byte limit", path.display())]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File does not carry the expected `.csv` extension.
    #[error("not a CSV file: {}", path.display())]
    NotCsv { path: PathBuf },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV records.
    #[error("failed to parse CSV {}: {message}", path.display())]
    CsvParse { path: PathBuf, message: String },

    /// CSV file is empty or has no header row.
    #[error("CSV file is empty: {}", path.display())]
    EmptyCsv { path: PathBuf },

    /// Header row exists but every column name is blank.
    #[error("could not detect header row in {}", path.display())]
    NoHeaderDetected { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
