//! Error types for dataset analysis.

use thiserror::Error;

/// Errors raised by the analyzer.
///
/// Malformed-but-tabular input never errors: unresolved roles degrade to
/// omission and unparseable values to row exclusion. Only structurally
/// unusable input is reported.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The input table has no data rows at all.
    #[error("table has no rows")]
    EmptyTable,

    /// Numeric cleaning excluded every row.
    #[error("no rows survived numeric cleaning")]
    NoUsableRows,
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalyzeError>;
