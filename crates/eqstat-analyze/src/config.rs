//! Analyzer configuration.
//!
//! Every threshold the scoring and outlier passes use lives here instead of
//! as literals in the computation code. The defaults are the fixed values
//! the report format was designed around.

/// Thresholds and limits for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Number of surviving rows included in the report's raw sample.
    pub sample_rows: usize,
    /// |z| above which a value is flagged as an outlier (population std).
    pub outlier_z: f64,
    /// |z| bands for health penalties: (mild, moderate] costs
    /// `mild_penalty`, (moderate, severe] costs `moderate_penalty`, and
    /// above `severe` costs `severe_penalty`.
    pub mild_z: f64,
    pub moderate_z: f64,
    pub severe_z: f64,
    pub mild_penalty: f64,
    pub moderate_penalty: f64,
    pub severe_penalty: f64,
    /// Health distribution bucket floors: excellent >= `excellent_min`,
    /// good >= `good_min`, fair >= `fair_min`, poor below that.
    pub excellent_min: f64,
    pub good_min: f64,
    pub fair_min: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            sample_rows: 20,
            outlier_z: 3.0,
            mild_z: 1.0,
            moderate_z: 2.0,
            severe_z: 3.0,
            mild_penalty: 10.0,
            moderate_penalty: 20.0,
            severe_penalty: 30.0,
            excellent_min: 90.0,
            good_min: 70.0,
            fair_min: 50.0,
        }
    }
}
