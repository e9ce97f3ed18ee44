//! Equipment dataset ingestion utilities.
//!
//! This crate loads uploaded CSV files into in-memory [`eqstat_model::Table`]
//! values for the analyzer.
//!
//! # Features
//!
//! - **Size guard**: reject files above a configurable byte limit
//! - **Encoding**: UTF-8 with BOM handling, Latin-1 fallback
//! - **Header normalization**: leading/trailing whitespace stripped
//! - **Missing values**: empty fields map to [`eqstat_model::CellValue::Missing`]
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use eqstat_ingest::{IngestConfig, read_csv_table};
//!
//! let table = read_csv_table(Path::new("plant.csv"), &IngestConfig::default())?;
//! ```

mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{
    IngestConfig, MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit,
    decode_csv_bytes, parse_csv_str, read_csv_table,
};
