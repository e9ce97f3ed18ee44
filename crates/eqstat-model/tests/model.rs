//! Tests for eqstat-model types.

use std::collections::BTreeMap;

use eqstat_model::{
    AnalysisReport, CellValue, HealthDistribution, NarrativeSource, ParameterAverages,
    ResolvedColumns, Row, SemanticRole, Table,
};

fn sample_table() -> Table {
    let mut table = Table::new(vec![
        "Type".to_string(),
        "Flowrate".to_string(),
        "Pressure".to_string(),
    ]);
    let mut row = Row::new();
    row.cells
        .insert("Type".to_string(), CellValue::Text("Pump".to_string()));
    row.cells
        .insert("Flowrate".to_string(), CellValue::Text("10.5".to_string()));
    row.cells.insert("Pressure".to_string(), CellValue::Missing);
    table.push_row(row);
    table
}

#[test]
fn table_counts_rows() {
    let table = sample_table();
    assert_eq!(table.row_count(), 1);
    assert!(!table.is_empty());
}

#[test]
fn resolved_columns_serialize_with_type_key() {
    let resolved = ResolvedColumns::resolve(&sample_table());
    let json = serde_json::to_value(&resolved).expect("serialize resolved columns");
    assert_eq!(json["type"], "Type");
    assert_eq!(json["flow"], "Flowrate");
    assert_eq!(json["temperature"], serde_json::Value::Null);
}

#[test]
fn every_role_has_synonyms() {
    for role in SemanticRole::ALL {
        assert!(!role.synonyms().is_empty(), "role {role:?} has no synonyms");
        assert!(!role.label().is_empty());
    }
}

#[test]
fn report_roundtrips_through_json() {
    let report = AnalysisReport {
        total_count: 2,
        outliers_count: 0,
        outlier_details: vec![],
        health_score_avg: 95.0,
        health_score_distribution: HealthDistribution {
            excellent: 2,
            ..HealthDistribution::default()
        },
        type_distribution: BTreeMap::from([("Pump".to_string(), 2)]),
        type_statistics: BTreeMap::new(),
        correlation: BTreeMap::new(),
        statistics: BTreeMap::new(),
        trends: BTreeMap::new(),
        narrative: "ok".to_string(),
        narrative_source: NarrativeSource::Fallback,
        averages: ParameterAverages::default(),
        raw_sample: vec![],
        column_names: ResolvedColumns::default(),
    };
    let json = serde_json::to_string(&report).expect("serialize report");
    let round: AnalysisReport = serde_json::from_str(&json).expect("deserialize report");
    assert_eq!(round.total_count, 2);
    assert_eq!(round.health_score_distribution.total(), 2);
    assert_eq!(round.narrative_source, NarrativeSource::Fallback);
}
