//! Exact-duplicate row detection and removal.
//!
//! A row is a duplicate when its full value tuple is identical to an earlier
//! row in the same dataset. Both the count used by the drift comparator and
//! the removal performed here go through [`Row::canonical_key`], so they
//! share one equality rule.
//!
//! [`Row::canonical_key`]: crate::dataset::Row::canonical_key

use std::collections::HashSet;

use crate::dataset::Dataset;

/// Counts rows that exactly duplicate an earlier row.
pub fn find_duplicate_rows(dataset: &Dataset) -> u64 {
    let mut seen: HashSet<String> = HashSet::new();
    let mut duplicate_count: u64 = 0;

    for row in &dataset.rows {
        if !seen.insert(row.canonical_key()) {
            duplicate_count += 1;
        }
    }

    duplicate_count
}

/// Removes exact-duplicate rows, retaining the first occurrence of each.
///
/// Returns the cleaned dataset and the number of rows removed. The input is
/// untouched; the cleaned dataset keeps the original name and column set and
/// preserves the relative order of retained rows. Idempotent: running this
/// on an already-clean dataset removes nothing.
pub fn deduplicate(dataset: &Dataset) -> (Dataset, u64) {
    let mut seen: HashSet<String> = HashSet::new();
    let mut retained = Vec::with_capacity(dataset.rows.len());

    for row in &dataset.rows {
        if seen.insert(row.canonical_key()) {
            retained.push(row.clone());
        }
    }

    let rows_removed = (dataset.rows.len() - retained.len()) as u64;

    if rows_removed > 0 {
        tracing::info!(
            dataset = %dataset.name,
            rows_removed,
            "duplicate rows removed"
        );
    }

    let cleaned = Dataset {
        name: dataset.name.clone(),
        columns: dataset.columns.clone(),
        rows: retained,
    };

    (cleaned, rows_removed)
}
