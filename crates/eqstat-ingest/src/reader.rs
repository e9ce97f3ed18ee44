//! CSV file reading with encoding detection and table construction.

use std::path::Path;

use eqstat_model::{CellValue, Row, Table};

use crate::error::{IngestError, Result};

/// Maximum file size for CSV loading (10 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Ingestion settings, passed by the caller rather than baked into source.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Reject files larger than this many bytes.
    pub max_file_size: u64,
    /// Reject paths without a `.csv` extension.
    pub require_csv_extension: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            max_file_size: MAX_CSV_FILE_SIZE,
            require_csv_extension: true,
        }
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Decode CSV bytes as UTF-8 (BOM stripped), falling back to Latin-1.
///
/// Latin-1 maps every byte to the code point of the same value, so the
/// fallback never fails; it only mislabels bytes from other encodings.
pub fn decode_csv_bytes(bytes: &[u8]) -> String {
    let stripped = bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(bytes);
    match std::str::from_utf8(stripped) {
        Ok(text) => text.to_string(),
        Err(_) => {
            tracing::debug!("input is not valid UTF-8, decoding as Latin-1");
            stripped.iter().map(|&byte| byte as char).collect()
        }
    }
}

/// Reads a CSV file into a [`Table`].
///
/// Validates the extension and size per the config, decodes the bytes, trims
/// header names, and maps empty fields to [`CellValue::Missing`]. Numeric
/// coercion is deliberately left to the analyzer so raw values survive for
/// display.
pub fn read_csv_table(path: &Path, config: &IngestConfig) -> Result<Table> {
    if config.require_csv_extension
        && !path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
    {
        return Err(IngestError::NotCsv {
            path: path.to_path_buf(),
        });
    }

    check_file_size_with_limit(path, config.max_file_size)?;

    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let content = decode_csv_bytes(&bytes);
    let table = parse_csv_str(&content, path)?;

    tracing::debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.columns.len(),
        "loaded CSV table"
    );

    Ok(table)
}

/// Parses decoded CSV text into a [`Table`].
///
/// Header names are whitespace-trimmed. Short records leave trailing columns
/// missing; extra fields beyond the header are dropped. Fully blank records
/// are skipped.
pub fn parse_csv_str(content: &str, path: &Path) -> Result<Table> {
    if content.trim().is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .iter()
        .map(|name| name.trim().to_string())
        .collect::<Vec<_>>();

    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }

    let mut table = Table::new(headers.clone());

    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let mut row = Row::new();
        for (index, column) in headers.iter().enumerate() {
            if column.is_empty() {
                continue;
            }
            let cell = match record.get(index) {
                Some(field) if !field.is_empty() => CellValue::Text(field.to_string()),
                _ => CellValue::Missing,
            };
            row.cells.insert(column.clone(), cell);
        }
        table.push_row(row);
    }

    Ok(table)
}
