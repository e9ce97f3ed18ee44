//! Health scoring and z-score outlier detection.

use eqstat_model::{HealthDistribution, OutlierDetail};

use crate::clean::CleanTable;
use crate::config::AnalyzerConfig;
use crate::stats::{mean, population_std, round2, sample_std};

/// Per-row health scores in [0, 100].
///
/// Each row starts at 100 and is penalized per numeric column by the
/// magnitude of its z-score against that column's mean and sample standard
/// deviation. A column with zero deviation contributes no penalty.
pub fn health_scores(clean: &CleanTable<'_>, config: &AnalyzerConfig) -> Vec<f64> {
    let column_moments: Vec<(f64, f64)> = clean
        .values
        .iter()
        .map(|column| (mean(column), sample_std(column)))
        .collect();

    (0..clean.row_count())
        .map(|row| {
            let mut score = 100.0;
            for (column, (center, std)) in clean.values.iter().zip(&column_moments) {
                if *std <= 0.0 {
                    continue;
                }
                let z = ((column[row] - center) / std).abs();
                if z > config.severe_z {
                    score -= config.severe_penalty;
                } else if z > config.moderate_z {
                    score -= config.moderate_penalty;
                } else if z > config.mild_z {
                    score -= config.mild_penalty;
                }
            }
            score.max(0.0)
        })
        .collect()
}

/// Buckets health scores into the distribution bands.
pub fn health_distribution(scores: &[f64], config: &AnalyzerConfig) -> HealthDistribution {
    let mut distribution = HealthDistribution::default();
    for &score in scores {
        if score >= config.excellent_min {
            distribution.excellent += 1;
        } else if score >= config.good_min {
            distribution.good += 1;
        } else if score >= config.fair_min {
            distribution.fair += 1;
        } else {
            distribution.poor += 1;
        }
    }
    distribution
}

/// Outlier totals plus per-column detail.
#[derive(Debug, Default)]
pub struct OutlierReport {
    pub total: usize,
    pub details: Vec<OutlierDetail>,
}

/// Flags (row, column) pairs with |z| above the threshold.
///
/// Uses the population standard deviation; a column with zero deviation can
/// flag nothing. Columns are independent: a row may be an outlier in one
/// parameter and nominal in another.
pub fn detect_outliers(clean: &CleanTable<'_>, config: &AnalyzerConfig) -> OutlierReport {
    let mut report = OutlierReport::default();
    let row_count = clean.row_count();
    if row_count == 0 {
        return report;
    }

    for (name, column) in clean.numeric_columns.iter().zip(&clean.values) {
        let std = population_std(column);
        if std <= 0.0 {
            continue;
        }
        let center = mean(column);
        let count = column
            .iter()
            .filter(|value| ((*value - center) / std).abs() > config.outlier_z)
            .count();
        report.total += count;
        if count > 0 {
            report.details.push(OutlierDetail {
                parameter: name.clone(),
                count,
                percentage: round2(count as f64 / row_count as f64 * 100.0),
            });
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use eqstat_model::{CellValue, ResolvedColumns, Row, Table};

    use crate::clean::clean_numeric;

    fn pressure_table(values: &[&str]) -> Table {
        let mut table = Table::new(vec!["Pressure".to_string()]);
        for value in values {
            let mut row = Row::new();
            row.cells
                .insert("Pressure".to_string(), CellValue::Text((*value).to_string()));
            table.push_row(row);
        }
        table
    }

    #[test]
    fn constant_column_scores_perfect_and_flags_nothing() {
        let table = pressure_table(&["2.0", "2.0", "2.0", "2.0"]);
        let resolved = ResolvedColumns::resolve(&table);
        let clean = clean_numeric(&table, &resolved);
        let config = AnalyzerConfig::default();

        let scores = health_scores(&clean, &config);
        assert!(scores.iter().all(|&score| score == 100.0));

        let outliers = detect_outliers(&clean, &config);
        assert_eq!(outliers.total, 0);
        assert!(outliers.details.is_empty());
    }

    #[test]
    fn spike_is_flagged_and_penalized() {
        // Eleven identical readings and one spike: population z = sqrt(11) > 3,
        // sample z just over 3, so the spike costs the severe penalty.
        let mut values = vec!["2.0"; 11];
        values.push("50.0");
        let table = pressure_table(&values);
        let resolved = ResolvedColumns::resolve(&table);
        let clean = clean_numeric(&table, &resolved);
        let config = AnalyzerConfig::default();

        let outliers = detect_outliers(&clean, &config);
        assert_eq!(outliers.total, 1);
        assert_eq!(outliers.details.len(), 1);
        assert_eq!(outliers.details[0].parameter, "Pressure");
        assert_eq!(outliers.details[0].count, 1);
        assert!((outliers.details[0].percentage - 8.33).abs() < 1e-9);

        let scores = health_scores(&clean, &config);
        assert_eq!(scores[11], 70.0);
        assert!(scores[..11].iter().all(|&score| score == 100.0));
    }

    #[test]
    fn scores_never_leave_unit_interval() {
        let table = pressure_table(&["1.0", "1.0", "1.0", "1000.0", "-1000.0"]);
        let resolved = ResolvedColumns::resolve(&table);
        let clean = clean_numeric(&table, &resolved);
        let scores = health_scores(&clean, &AnalyzerConfig::default());

        assert!(scores.iter().all(|&score| (0.0..=100.0).contains(&score)));
    }

    #[test]
    fn distribution_counts_sum_to_row_count() {
        let scores = [100.0, 95.0, 85.0, 60.0, 40.0, 0.0];
        let distribution = health_distribution(&scores, &AnalyzerConfig::default());

        assert_eq!(distribution.excellent, 2);
        assert_eq!(distribution.good, 1);
        assert_eq!(distribution.fair, 1);
        assert_eq!(distribution.poor, 2);
        assert_eq!(distribution.total(), scores.len());
    }
}
