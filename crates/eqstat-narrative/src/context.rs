//! Inputs shared by the prompt builder and the fallback template.

use eqstat_model::{AnalysisReport, ColumnStats};

/// An equipment unit whose health score fell below the critical threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct CriticalUnit {
    /// Value of the resolved name column, or "Unknown".
    pub name: String,
    pub health_score: f64,
}

/// Everything the narrative needs: the computed report plus the critical
/// equipment list the analyzer extracted from surviving rows.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeContext<'a> {
    pub report: &'a AnalysisReport,
    pub critical_units: &'a [CriticalUnit],
}

impl NarrativeContext<'_> {
    /// Units below the critical threshold (health < 50).
    pub fn critical_count(&self) -> usize {
        self.report.health_score_distribution.poor
    }

    /// Units in the fair band ([50, 70)), showing early degradation.
    pub fn warning_count(&self) -> usize {
        self.report.health_score_distribution.fair
    }

    /// Units below optimal performance (health < 70).
    pub fn below_optimal_count(&self) -> usize {
        self.critical_count() + self.warning_count()
    }

    /// Coefficient of variation for one column, as a percentage.
    pub fn coefficient_of_variation(stats: &ColumnStats) -> f64 {
        if stats.mean == 0.0 {
            0.0
        } else {
            stats.std / stats.mean * 100.0
        }
    }

    /// True when any numeric parameter varies by more than 20% of its mean.
    pub fn high_variability(&self) -> bool {
        self.report
            .statistics
            .values()
            .any(|stats| Self::coefficient_of_variation(stats) > 20.0)
    }

    /// Outliers exceeding 5% of surviving rows suggest sensor problems.
    pub fn outliers_exceed_noise_floor(&self) -> bool {
        self.report.outliers_count as f64 > self.report.total_count as f64 * 0.05
    }

    /// Correlations with |r| > 0.7, in report key order.
    pub fn strong_correlations(&self) -> Vec<(&str, f64)> {
        self.report
            .correlation
            .iter()
            .filter(|(_, value)| value.abs() > 0.7)
            .map(|(key, value)| (key.as_str(), *value))
            .collect()
    }

    /// Operational risk level derived from the health distribution.
    pub fn risk_level(&self) -> &'static str {
        if self.critical_count() > 0 {
            "HIGH"
        } else if self.warning_count() > 3 {
            "MEDIUM"
        } else {
            "LOW"
        }
    }

    /// Qualitative reliability label for the average health score.
    pub fn reliability(&self) -> &'static str {
        if self.report.health_score_avg >= 85.0 {
            "excellent"
        } else if self.report.health_score_avg >= 70.0 {
            "good"
        } else {
            "concerning"
        }
    }

    /// (min, max, mean) for the column a role resolved to, zeros when absent.
    pub fn parameter_range(&self, column: Option<&str>) -> (f64, f64, f64) {
        column
            .and_then(|name| self.report.statistics.get(name))
            .map_or((0.0, 0.0, 0.0), |stats| {
                (stats.min, stats.max, stats.mean)
            })
    }
}
