//! Linear trend analysis over chronologically ordered rows.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use eqstat_model::{Trend, TrendDirection};

use crate::clean::CleanTable;
use crate::stats::{mean, ols_slope};

/// Accepted timestamp formats, tried in order.
///
/// A fixed list instead of a permissive guesser: anything that parses in no
/// listed format drops out of the trend computation, silently.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y"];

/// Parses a timestamp cell to a chronological value.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.naive_utc());
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, format) {
            return parsed.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Per-column linear trends against row sequence order.
///
/// Only computed when a timestamp column resolved and at least two rows
/// parse: rows with unparseable timestamps are dropped, survivors sorted
/// ascending, and each numeric column fitted by OLS against index 0..n-1.
/// Returns an empty map, never an error, when trends cannot be computed.
pub fn compute_trends(clean: &CleanTable<'_>) -> BTreeMap<String, Trend> {
    let Some(timestamp_column) = clean.resolved.timestamp.as_deref() else {
        return BTreeMap::new();
    };

    let mut ordered: Vec<(NaiveDateTime, usize)> = (0..clean.row_count())
        .filter_map(|row| {
            clean
                .cell_text(row, timestamp_column)
                .and_then(parse_timestamp)
                .map(|instant| (instant, row))
        })
        .collect();

    if ordered.len() < 2 {
        if clean.row_count() > 0 {
            tracing::debug!(
                column = timestamp_column,
                parsed = ordered.len(),
                "too few parseable timestamps, omitting trends"
            );
        }
        return BTreeMap::new();
    }

    // Stable on the original row order for equal timestamps.
    ordered.sort_by_key(|(instant, _)| *instant);

    let mut trends = BTreeMap::new();
    for (name, column) in clean.numeric_columns.iter().zip(&clean.values) {
        let series: Vec<f64> = ordered.iter().map(|&(_, row)| column[row]).collect();
        let slope = ols_slope(&series);
        let center = mean(&series);
        let change_rate = if center == 0.0 {
            0.0
        } else {
            slope / center * 100.0
        };
        trends.insert(
            name.clone(),
            Trend {
                direction: if slope > 0.0 {
                    TrendDirection::Increasing
                } else {
                    TrendDirection::Decreasing
                },
                slope,
                change_rate,
            },
        );
    }
    trends
}
