//! Equipment dataset data model.
//!
//! Shared types for the analysis pipeline:
//!
//! - **Table**: ordered in-memory tabular data as ingested from CSV
//! - **Semantic Roles**: synonym-based column resolution (type, flow,
//!   pressure, temperature, name, timestamp)
//! - **Report**: the serializable analysis output

mod report;
mod roles;
mod table;

pub use report::{
    AnalysisReport, CategoryStats, ColumnStats, HealthDistribution, NarrativeSource,
    OutlierDetail, ParameterAverages, Trend, TrendDirection,
};
pub use roles::{ResolvedColumns, SemanticRole};
pub use table::{CellValue, Row, Table};
