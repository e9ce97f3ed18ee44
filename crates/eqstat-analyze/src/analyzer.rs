//! Report assembly: one table in, one report out.

use std::collections::BTreeMap;

use eqstat_model::{
    AnalysisReport, ColumnStats, NarrativeSource, ParameterAverages, ResolvedColumns, Table,
};
use eqstat_narrative::{CriticalUnit, NarrativeContext, NarrativeGenerator, narrative_for};

use crate::category::category_stats;
use crate::clean::{CleanTable, clean_numeric};
use crate::config::AnalyzerConfig;
use crate::correlation::correlation_pairs;
use crate::error::{AnalyzeError, Result};
use crate::health::{detect_outliers, health_distribution, health_scores};
use crate::stats::{mean, median, quantile, sample_std};
use crate::trend::compute_trends;

/// Analyzes a table and produces the full report.
///
/// Pure and total over any well-formed table: unresolved roles degrade to
/// omission, unparseable values to row exclusion, narrative failure to the
/// deterministic fallback. Errors only when no rows remain to analyze.
pub fn analyze(
    table: &Table,
    config: &AnalyzerConfig,
    generator: &dyn NarrativeGenerator,
) -> Result<AnalysisReport> {
    if table.is_empty() {
        return Err(AnalyzeError::EmptyTable);
    }

    let resolved = ResolvedColumns::resolve(table);
    let clean = clean_numeric(table, &resolved);
    if clean.row_count() == 0 {
        return Err(AnalyzeError::NoUsableRows);
    }

    let statistics = column_statistics(&clean);
    let scores = health_scores(&clean, config);
    let distribution = health_distribution(&scores, config);
    let outliers = detect_outliers(&clean, config);
    let correlation = correlation_pairs(&clean);
    let trends = compute_trends(&clean);
    let (type_distribution, type_statistics) = category_stats(&clean, &scores);

    let averages = ParameterAverages {
        flow: role_mean(&statistics, resolved.flow.as_deref()),
        pressure: role_mean(&statistics, resolved.pressure.as_deref()),
        temperature: role_mean(&statistics, resolved.temperature.as_deref()),
    };

    let critical_units = collect_critical_units(&clean, &scores, config);
    let raw_sample = sample_rows(&clean, &scores, config.sample_rows);

    tracing::debug!(
        rows = clean.row_count(),
        outliers = outliers.total,
        trends = trends.len(),
        categories = type_distribution.len(),
        "analysis computed"
    );

    let mut report = AnalysisReport {
        total_count: clean.row_count(),
        outliers_count: outliers.total,
        outlier_details: outliers.details,
        health_score_avg: mean(&scores),
        health_score_distribution: distribution,
        type_distribution,
        type_statistics,
        correlation,
        statistics,
        trends,
        narrative: String::new(),
        narrative_source: NarrativeSource::Fallback,
        averages,
        raw_sample,
        column_names: resolved,
    };

    let outcome = narrative_for(
        generator,
        &NarrativeContext {
            report: &report,
            critical_units: &critical_units,
        },
    );
    report.narrative = outcome.text;
    report.narrative_source = outcome.source;

    Ok(report)
}

/// Descriptive statistics for every resolved numeric column.
fn column_statistics(clean: &CleanTable<'_>) -> BTreeMap<String, ColumnStats> {
    clean
        .numeric_columns
        .iter()
        .zip(&clean.values)
        .map(|(name, values)| {
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            (
                name.clone(),
                ColumnStats {
                    mean: mean(values),
                    median: median(values),
                    std: sample_std(values),
                    min,
                    max,
                    q25: quantile(values, 0.25),
                    q75: quantile(values, 0.75),
                },
            )
        })
        .collect()
}

fn role_mean(statistics: &BTreeMap<String, ColumnStats>, column: Option<&str>) -> f64 {
    column
        .and_then(|name| statistics.get(name))
        .map_or(0.0, |stats| stats.mean)
}

/// Equipment below the critical health threshold, first five in row order.
fn collect_critical_units(
    clean: &CleanTable<'_>,
    scores: &[f64],
    config: &AnalyzerConfig,
) -> Vec<CriticalUnit> {
    let name_column = clean.resolved.name.as_deref();
    scores
        .iter()
        .enumerate()
        .filter(|(_, score)| **score < config.fair_min)
        .take(5)
        .map(|(row, score)| CriticalUnit {
            name: name_column
                .and_then(|column| clean.cell_text(row, column))
                .unwrap_or("Unknown")
                .to_string(),
            health_score: *score,
        })
        .collect()
}

/// First N surviving rows formatted for display, derived health appended.
fn sample_rows(
    clean: &CleanTable<'_>,
    scores: &[f64],
    limit: usize,
) -> Vec<BTreeMap<String, String>> {
    (0..clean.row_count().min(limit))
        .map(|row| {
            let mut record: BTreeMap<String, String> = clean
                .source
                .columns
                .iter()
                .map(|column| {
                    let value = clean.cell_text(row, column).unwrap_or("").to_string();
                    (column.clone(), value)
                })
                .collect();
            record.insert("health_score".to_string(), format!("{:.0}", scores[row]));
            record
        })
        .collect()
}
