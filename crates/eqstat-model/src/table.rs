#![deny(unsafe_code)]

use std::collections::BTreeMap;

/// A single cell in an ingested table.
///
/// Values arrive from CSV as text; numeric coercion happens later during
/// analysis so the raw representation survives for display.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    /// Returns the text content, or `None` for missing cells.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new() -> Self {
        Self {
            cells: BTreeMap::new(),
        }
    }

    /// Returns the cell for a column, treating absent columns as missing.
    pub fn get(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&CellValue::Missing)
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

/// An in-memory tabular dataset: ordered column names plus rows.
///
/// Request-scoped: built fresh per analysis, discarded after the report
/// is serialized.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cell_for_absent_column() {
        let row = Row::new();
        assert!(row.get("Pressure").is_missing());
    }

    #[test]
    fn text_cell_roundtrip() {
        let cell = CellValue::Text("4.2".to_string());
        assert_eq!(cell.as_text(), Some("4.2"));
        assert!(!cell.is_missing());
    }
}
