//! Dataset analyzer for equipment process data.
//!
//! Takes an in-memory [`eqstat_model::Table`] and produces an
//! [`eqstat_model::AnalysisReport`]: health scores, z-score outliers,
//! pairwise correlations, linear trends, per-category aggregates,
//! descriptive statistics, and a narrative summary.
//!
//! The pipeline is a handful of numeric passes over the cleaned table:
//!
//! 1. Resolve semantic roles against column names (synonym matching)
//! 2. Coerce numeric columns, drop rows with missing values
//! 3. Score, flag, correlate, fit, aggregate
//! 4. Assemble the report and attach the narrative
//!
//! Each invocation is independent and stateless; nothing is shared across
//! calls.

mod analyzer;
mod category;
mod clean;
mod config;
mod correlation;
mod error;
mod health;
mod numeric;
mod stats;
mod trend;

pub use analyzer::analyze;
pub use category::category_stats;
pub use clean::{CleanTable, clean_numeric};
pub use config::AnalyzerConfig;
pub use correlation::correlation_pairs;
pub use error::{AnalyzeError, Result};
pub use health::{OutlierReport, detect_outliers, health_distribution, health_scores};
pub use numeric::{is_numeric, parse_numeric};
pub use stats::{mean, median, ols_slope, pearson, population_std, quantile, round2, sample_std};
pub use trend::{compute_trends, parse_timestamp};
