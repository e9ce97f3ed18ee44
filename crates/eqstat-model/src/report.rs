//! Analysis report types.
//!
//! The report is the analyzer's only output: a serializable snapshot of
//! everything computed over one table. All collections use `BTreeMap` so the
//! JSON projection is deterministic.

use std::collections::BTreeMap;

use crate::ResolvedColumns;

/// Per-column outlier summary (|z| above the configured threshold).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OutlierDetail {
    pub parameter: String,
    pub count: usize,
    /// Share of surviving rows flagged, rounded to 2 decimals.
    pub percentage: f64,
}

/// Health score bucket counts. Buckets partition [0,100], so the counts
/// sum to the surviving row count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HealthDistribution {
    pub excellent: usize,
    pub good: usize,
    pub fair: usize,
    pub poor: usize,
}

impl HealthDistribution {
    pub fn total(&self) -> usize {
        self.excellent + self.good + self.fair + self.poor
    }
}

/// Descriptive statistics for one numeric column over surviving rows.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColumnStats {
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation (ddof 1).
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub q25: f64,
    pub q75: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
}

/// Linear trend of a numeric column over chronologically ordered rows.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Trend {
    pub direction: TrendDirection,
    /// OLS slope against row sequence index.
    pub slope: f64,
    /// Slope normalized by the column mean, as a percentage per row.
    pub change_rate: f64,
}

/// Aggregates for one equipment category (raw `type` column value).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CategoryStats {
    pub count: usize,
    pub avg_health: f64,
    /// 0.0 when no pressure column resolved.
    pub avg_pressure: f64,
    /// 0.0 when no temperature column resolved.
    pub avg_temp: f64,
}

/// Mean of each resolved numeric parameter; 0.0 for absent roles.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParameterAverages {
    pub flow: f64,
    pub pressure: f64,
    pub temperature: f64,
}

/// Where the narrative text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrativeSource {
    /// Returned by the external generative service.
    Generated,
    /// Deterministic template interpolated from computed statistics.
    Fallback,
}

/// Complete analysis output for one table.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisReport {
    /// Rows surviving numeric cleaning.
    pub total_count: usize,
    pub outliers_count: usize,
    pub outlier_details: Vec<OutlierDetail>,
    pub health_score_avg: f64,
    pub health_score_distribution: HealthDistribution,
    /// Row count per raw equipment type value.
    pub type_distribution: BTreeMap<String, usize>,
    pub type_statistics: BTreeMap<String, CategoryStats>,
    /// Upper-triangle Pearson correlations keyed `"<colA> vs <colB>"`.
    pub correlation: BTreeMap<String, f64>,
    pub statistics: BTreeMap<String, ColumnStats>,
    /// Empty when no timestamp column resolved or nothing parsed.
    pub trends: BTreeMap<String, Trend>,
    pub narrative: String,
    pub narrative_source: NarrativeSource,
    pub averages: ParameterAverages,
    /// First N surviving rows, formatted for display, with the derived
    /// health score appended.
    pub raw_sample: Vec<BTreeMap<String, String>>,
    pub column_names: ResolvedColumns,
}
