//! Numeric cleaning: coercion and destructive row filtering.

use eqstat_model::{ResolvedColumns, Table};

use crate::numeric::parse_numeric;

/// The analyzer's working view of a table after numeric cleaning.
///
/// Holds the surviving row indices into the source table plus the coerced
/// numeric values in column-major order. A row missing (or failing to parse)
/// any resolved numeric column is excluded entirely, never imputed; every
/// count reported downstream reflects survivors only.
#[derive(Debug)]
pub struct CleanTable<'a> {
    pub source: &'a Table,
    pub resolved: &'a ResolvedColumns,
    /// Resolved numeric column names in flow, pressure, temperature order.
    pub numeric_columns: Vec<String>,
    /// Indices of surviving rows in the source table.
    pub row_indices: Vec<usize>,
    /// Coerced values, one inner vector per numeric column, aligned with
    /// `row_indices`.
    pub values: Vec<Vec<f64>>,
}

impl CleanTable<'_> {
    pub fn row_count(&self) -> usize {
        self.row_indices.len()
    }

    /// Coerced values for a numeric column.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.numeric_columns
            .iter()
            .position(|column| column == name)
            .map(|index| self.values[index].as_slice())
    }

    /// Raw text of a cell in a surviving row, by clean-row position.
    pub fn cell_text(&self, clean_row: usize, column: &str) -> Option<&str> {
        let source_index = *self.row_indices.get(clean_row)?;
        self.source.rows[source_index].get(column).as_text()
    }
}

/// Coerces resolved numeric columns and drops rows with missing values.
///
/// With no resolved numeric columns the filter is vacuous and every row
/// survives.
pub fn clean_numeric<'a>(table: &'a Table, resolved: &'a ResolvedColumns) -> CleanTable<'a> {
    let numeric_columns: Vec<String> = resolved
        .numeric_columns()
        .into_iter()
        .map(str::to_string)
        .collect();

    let mut row_indices = Vec::new();
    let mut values: Vec<Vec<f64>> = vec![Vec::new(); numeric_columns.len()];

    'rows: for (index, row) in table.rows.iter().enumerate() {
        let mut parsed = Vec::with_capacity(numeric_columns.len());
        for column in &numeric_columns {
            match row.get(column).as_text().and_then(parse_numeric) {
                Some(value) => parsed.push(value),
                None => continue 'rows,
            }
        }
        row_indices.push(index);
        for (slot, value) in values.iter_mut().zip(parsed) {
            slot.push(value);
        }
    }

    let dropped = table.rows.len() - row_indices.len();
    if dropped > 0 {
        tracing::debug!(dropped, surviving = row_indices.len(), "numeric cleaning excluded rows");
    }

    CleanTable {
        source: table,
        resolved,
        numeric_columns,
        row_indices,
        values,
    }
}
