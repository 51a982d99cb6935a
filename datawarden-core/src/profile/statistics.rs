//! Statistical summaries for profiled columns.

use std::collections::BTreeMap;

use super::models::{BooleanStats, CategoricalStats, NumericStats};

/// Calculates mean, population standard deviation, min, and max.
///
/// Uses population standard deviation (divides by n, not n-1); with fewer
/// than two values the deviation is 0.0, never NaN. An empty slice yields
/// all zeros so that an empty numeric column profiles cleanly.
pub(super) fn numeric_summary(values: &[f64]) -> NumericStats {
    if values.is_empty() {
        return NumericStats::default();
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;

    let std_dev = if values.len() < 2 {
        0.0
    } else {
        let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        variance.sqrt()
    };

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &value in values {
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }

    NumericStats {
        mean,
        std_dev,
        min,
        max,
    }
}

/// Builds distinct-count and top-N frequency statistics.
///
/// Counts are accumulated in a `BTreeMap` so the tie-break is already
/// lexicographic ascending on value; the final sort only has to order by
/// descending count while preserving that ordering for equal counts.
pub(super) fn categorical_summary<I>(values: I, top_n: usize) -> CategoricalStats
where
    I: IntoIterator<Item = String>,
{
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let distinct_count = counts.len() as u64;

    let mut ranked: Vec<(String, u64)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(top_n);

    CategoricalStats {
        distinct_count,
        top_values: ranked,
    }
}

/// Tallies true/false occurrences for a boolean column.
pub(super) fn boolean_summary<I>(values: I) -> BooleanStats
where
    I: IntoIterator<Item = bool>,
{
    let mut stats = BooleanStats::default();
    for value in values {
        if value {
            stats.true_count += 1;
        } else {
            stats.false_count += 1;
        }
    }
    stats
}
