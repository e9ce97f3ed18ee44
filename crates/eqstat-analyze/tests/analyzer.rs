//! End-to-end analyzer tests over in-memory tables.

use eqstat_analyze::{AnalyzeError, AnalyzerConfig, analyze};
use eqstat_model::{CellValue, NarrativeSource, Row, Table, TrendDirection};
use eqstat_narrative::DisabledGenerator;

fn build_table(columns: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(columns.iter().map(|c| (*c).to_string()).collect());
    for fields in rows {
        let mut row = Row::new();
        for (column, field) in columns.iter().zip(*fields) {
            let cell = if field.is_empty() {
                CellValue::Missing
            } else {
                CellValue::Text((*field).to_string())
            };
            row.cells.insert((*column).to_string(), cell);
        }
        table.push_row(row);
    }
    table
}

fn plant_table() -> Table {
    build_table(
        &["Equipment_Name", "Type", "Flowrate", "Pressure", "Temperature", "Timestamp"],
        &[
            &["P-101", "Pump", "10.0", "2.0", "80.0", "2024-01-01"],
            &["P-102", "Pump", "12.0", "2.2", "82.0", "2024-01-02"],
            &["P-103", "Pump", "11.0", "2.1", "81.0", "2024-01-03"],
            &["V-201", "Valve", "9.0", "1.9", "79.0", "2024-01-04"],
            &["V-202", "Valve", "13.0", "2.3", "83.0", "2024-01-05"],
            &["C-301", "Compressor", "10.5", "2.05", "80.5", "2024-01-06"],
        ],
    )
}

#[test]
fn full_report_over_clean_table() {
    let report = analyze(&plant_table(), &AnalyzerConfig::default(), &DisabledGenerator)
        .expect("analysis succeeds");

    assert_eq!(report.total_count, 6);
    assert_eq!(report.health_score_distribution.total(), report.total_count);
    assert_eq!(report.column_names.flow.as_deref(), Some("Flowrate"));
    assert_eq!(report.column_names.equipment_type.as_deref(), Some("Type"));
    assert_eq!(report.type_distribution.get("Pump"), Some(&3));
    assert_eq!(report.type_distribution.get("Valve"), Some(&2));

    // Three numeric columns give exactly three unordered pairs.
    assert_eq!(report.correlation.len(), 3);
    assert!(report.correlation.contains_key("Flowrate vs Pressure"));
    assert!(!report.correlation.contains_key("Pressure vs Flowrate"));

    assert_eq!(report.statistics.len(), 3);
    let flow = report.statistics.get("Flowrate").expect("flow stats");
    assert!((flow.mean - 10.916666666666666).abs() < 1e-9);
    assert_eq!(flow.min, 9.0);
    assert_eq!(flow.max, 13.0);

    assert!((report.averages.flow - flow.mean).abs() < 1e-12);
    assert!(report.averages.pressure > 0.0);

    // Timestamps all parse, so every numeric column has a trend.
    assert_eq!(report.trends.len(), 3);

    assert_eq!(report.raw_sample.len(), 6);
    assert_eq!(
        report.raw_sample[0].get("Equipment_Name").map(String::as_str),
        Some("P-101")
    );
    assert!(report.raw_sample[0].contains_key("health_score"));
}

#[test]
fn pressure_spike_is_flagged_and_penalized() {
    // Eleven steady rows and one spike so the population z-score clears 3.
    let mut rows: Vec<Vec<&str>> = (0..11).map(|_| vec!["Pump", "10.0", "2.0"]).collect();
    rows.push(vec!["Pump", "10.0", "50.0"]);
    let row_refs: Vec<&[&str]> = rows.iter().map(Vec::as_slice).collect();
    let table = build_table(&["Type", "Flowrate", "Pressure"], &row_refs);

    let report =
        analyze(&table, &AnalyzerConfig::default(), &DisabledGenerator).expect("analysis succeeds");

    assert!(report.outliers_count >= 1);
    let detail = report
        .outlier_details
        .iter()
        .find(|detail| detail.parameter == "Pressure")
        .expect("pressure outlier detail");
    assert_eq!(detail.count, 1);

    // The spike row loses exactly the severe penalty.
    let spike_health: f64 = report.raw_sample[11]
        .get("health_score")
        .expect("health score")
        .parse()
        .expect("numeric health score");
    assert_eq!(spike_health, 70.0);
}

#[test]
fn zero_variance_column_flags_no_outliers() {
    let table = build_table(
        &["Pressure"],
        &[&["2.0"], &["2.0"], &["2.0"], &["2.0"], &["2.0"]],
    );
    let report =
        analyze(&table, &AnalyzerConfig::default(), &DisabledGenerator).expect("analysis succeeds");

    assert_eq!(report.outliers_count, 0);
    assert!(report.outlier_details.is_empty());
    assert_eq!(report.health_score_avg, 100.0);
}

#[test]
fn missing_timestamp_means_empty_trends() {
    let table = build_table(&["Pressure"], &[&["1.0"], &["2.0"], &["3.0"]]);
    let report =
        analyze(&table, &AnalyzerConfig::default(), &DisabledGenerator).expect("analysis succeeds");

    assert!(report.trends.is_empty());
}

#[test]
fn trends_follow_chronological_order() {
    let table = build_table(
        &["Timestamp", "Pressure"],
        &[
            &["2024-01-03", "3.0"],
            &["2024-01-01", "1.0"],
            &["2024-01-04", "4.0"],
            &["2024-01-02", "2.0"],
        ],
    );
    let report =
        analyze(&table, &AnalyzerConfig::default(), &DisabledGenerator).expect("analysis succeeds");

    let trend = report.trends.get("Pressure").expect("pressure trend");
    assert_eq!(trend.direction, TrendDirection::Increasing);
    assert!((trend.slope - 1.0).abs() < 1e-9);
}

#[test]
fn unparseable_rows_shrink_total_count() {
    let table = build_table(
        &["Flowrate"],
        &[&["1.0"], &["broken"], &["2.0"], &[""], &["3.0"]],
    );
    let report =
        analyze(&table, &AnalyzerConfig::default(), &DisabledGenerator).expect("analysis succeeds");

    assert_eq!(report.total_count, 3);
    assert_eq!(report.raw_sample.len(), 3);
}

#[test]
fn empty_table_is_an_error() {
    let table = Table::new(vec!["Pressure".to_string()]);
    let result = analyze(&table, &AnalyzerConfig::default(), &DisabledGenerator);

    assert!(matches!(result, Err(AnalyzeError::EmptyTable)));
}

#[test]
fn all_rows_dropped_is_an_error() {
    let table = build_table(&["Pressure"], &[&["broken"], &["also broken"]]);
    let result = analyze(&table, &AnalyzerConfig::default(), &DisabledGenerator);

    assert!(matches!(result, Err(AnalyzeError::NoUsableRows)));
}

#[test]
fn narrative_fallback_interpolates_report_numbers() {
    let report = analyze(&plant_table(), &AnalyzerConfig::default(), &DisabledGenerator)
        .expect("analysis succeeds");

    assert_eq!(report.narrative_source, NarrativeSource::Fallback);
    assert!(!report.narrative.is_empty());
    assert!(
        report
            .narrative
            .contains(&format!("{} equipment units", report.total_count))
    );
    assert!(
        report
            .narrative
            .contains(&format!("{:.1}%", report.health_score_avg))
    );
}

#[test]
fn no_numeric_columns_still_produces_a_report() {
    let table = build_table(
        &["Type", "Operator"],
        &[&["Pump", "a"], &["Valve", "b"]],
    );
    let report =
        analyze(&table, &AnalyzerConfig::default(), &DisabledGenerator).expect("analysis succeeds");

    assert_eq!(report.total_count, 2);
    assert!(report.statistics.is_empty());
    assert!(report.correlation.is_empty());
    assert_eq!(report.health_score_avg, 100.0);
    assert_eq!(report.averages.flow, 0.0);
    assert_eq!(report.type_distribution.len(), 2);
}

#[test]
fn sample_is_capped_by_config() {
    let rows: Vec<Vec<&str>> = (0..30).map(|_| vec!["1.0"]).collect();
    let row_refs: Vec<&[&str]> = rows.iter().map(Vec::as_slice).collect();
    let table = build_table(&["Flowrate"], &row_refs);

    let report =
        analyze(&table, &AnalyzerConfig::default(), &DisabledGenerator).expect("analysis succeeds");
    assert_eq!(report.raw_sample.len(), 20);

    let config = AnalyzerConfig {
        sample_rows: 5,
        ..AnalyzerConfig::default()
    };
    let report = analyze(&table, &config, &DisabledGenerator).expect("analysis succeeds");
    assert_eq!(report.raw_sample.len(), 5);
}

#[test]
fn report_serializes_to_json() {
    let report = analyze(&plant_table(), &AnalyzerConfig::default(), &DisabledGenerator)
        .expect("analysis succeeds");
    let json = serde_json::to_value(&report).expect("serialize report");

    assert_eq!(json["total_count"], 6);
    assert_eq!(json["column_names"]["type"], "Type");
    assert!(json["narrative"].as_str().is_some_and(|s| !s.is_empty()));
}
