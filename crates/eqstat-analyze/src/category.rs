//! Per-category aggregation over the resolved equipment type column.

use std::collections::BTreeMap;

use eqstat_model::CategoryStats;

use crate::clean::CleanTable;
use crate::stats::mean;

/// Groups surviving rows by raw equipment type value.
///
/// Returns the count per category and per-category aggregates: mean health
/// plus mean pressure/temperature (0.0 when the role is absent). Empty when
/// no type column resolved; rows with a missing type cell are skipped.
pub fn category_stats(
    clean: &CleanTable<'_>,
    health_scores: &[f64],
) -> (BTreeMap<String, usize>, BTreeMap<String, CategoryStats>) {
    let Some(type_column) = clean.resolved.equipment_type.as_deref() else {
        return (BTreeMap::new(), BTreeMap::new());
    };

    let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for row in 0..clean.row_count() {
        if let Some(category) = clean.cell_text(row, type_column) {
            groups.entry(category.to_string()).or_default().push(row);
        }
    }

    let pressure = clean
        .resolved
        .pressure
        .as_deref()
        .and_then(|column| clean.column(column));
    let temperature = clean
        .resolved
        .temperature
        .as_deref()
        .and_then(|column| clean.column(column));

    let mut distribution = BTreeMap::new();
    let mut statistics = BTreeMap::new();
    for (category, rows) in groups {
        let group_mean = |column: Option<&[f64]>| {
            column.map_or(0.0, |values| {
                mean(&rows.iter().map(|&row| values[row]).collect::<Vec<_>>())
            })
        };

        let health: Vec<f64> = rows.iter().map(|&row| health_scores[row]).collect();
        distribution.insert(category.clone(), rows.len());
        statistics.insert(
            category,
            CategoryStats {
                count: rows.len(),
                avg_health: mean(&health),
                avg_pressure: group_mean(pressure),
                avg_temp: group_mean(temperature),
            },
        );
    }

    (distribution, statistics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eqstat_model::{CellValue, ResolvedColumns, Row, Table};

    use crate::clean::clean_numeric;

    fn table(rows: &[(&str, &str)]) -> Table {
        let columns = vec!["Type".to_string(), "Pressure".to_string()];
        let mut table = Table::new(columns);
        for (category, pressure) in rows {
            let mut row = Row::new();
            let type_cell = if category.is_empty() {
                CellValue::Missing
            } else {
                CellValue::Text((*category).to_string())
            };
            row.cells.insert("Type".to_string(), type_cell);
            row.cells.insert(
                "Pressure".to_string(),
                CellValue::Text((*pressure).to_string()),
            );
            table.push_row(row);
        }
        table
    }

    #[test]
    fn groups_by_raw_type_value() {
        let table = table(&[
            ("Pump", "2.0"),
            ("Pump", "4.0"),
            ("Valve", "6.0"),
        ]);
        let resolved = ResolvedColumns::resolve(&table);
        let clean = clean_numeric(&table, &resolved);
        let health = vec![100.0, 90.0, 80.0];

        let (distribution, statistics) = category_stats(&clean, &health);

        assert_eq!(distribution.get("Pump"), Some(&2));
        assert_eq!(distribution.get("Valve"), Some(&1));

        let pump = statistics.get("Pump").expect("pump stats");
        assert_eq!(pump.count, 2);
        assert!((pump.avg_health - 95.0).abs() < 1e-9);
        assert!((pump.avg_pressure - 3.0).abs() < 1e-9);
        // No temperature column resolved.
        assert_eq!(pump.avg_temp, 0.0);
    }

    #[test]
    fn missing_type_cells_are_skipped() {
        let table = table(&[("Pump", "2.0"), ("", "4.0")]);
        let resolved = ResolvedColumns::resolve(&table);
        let clean = clean_numeric(&table, &resolved);
        let health = vec![100.0, 100.0];

        let (distribution, _) = category_stats(&clean, &health);
        assert_eq!(distribution.len(), 1);
    }

    #[test]
    fn no_type_column_means_empty_aggregates() {
        let mut table = Table::new(vec!["Pressure".to_string()]);
        let mut row = Row::new();
        row.cells
            .insert("Pressure".to_string(), CellValue::Text("2.0".to_string()));
        table.push_row(row);
        let resolved = ResolvedColumns::resolve(&table);
        let clean = clean_numeric(&table, &resolved);

        let (distribution, statistics) = category_stats(&clean, &[100.0]);
        assert!(distribution.is_empty());
        assert!(statistics.is_empty());
    }
}
