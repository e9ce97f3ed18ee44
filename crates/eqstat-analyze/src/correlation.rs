//! Pairwise Pearson correlation across numeric columns.

use std::collections::BTreeMap;

use crate::clean::CleanTable;
use crate::stats::{pearson, round2};

/// Correlations for each unordered column pair, upper triangle only.
///
/// Keys are `"<colA> vs <colB>"` with the resolved column names in
/// resolution order. Degenerate pairs (zero variance on either side) are
/// omitted rather than reported as NaN.
pub fn correlation_pairs(clean: &CleanTable<'_>) -> BTreeMap<String, f64> {
    let mut pairs = BTreeMap::new();
    for i in 0..clean.numeric_columns.len() {
        for j in (i + 1)..clean.numeric_columns.len() {
            if let Some(value) = pearson(&clean.values[i], &clean.values[j]) {
                let key = format!(
                    "{} vs {}",
                    clean.numeric_columns[i], clean.numeric_columns[j]
                );
                pairs.insert(key, round2(value));
            }
        }
    }
    pairs
}
