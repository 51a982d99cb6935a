//! Profile result models.
//!
//! All profile structures contain only counts, aggregates, and frequent
//! values; they are safe to serialize into governance reports.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inferred type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Every non-missing value coerces to a finite number
    Numeric,
    /// Free-form text or mixed values
    Categorical,
    /// Every non-missing value is a boolean or boolean token
    Boolean,
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Numeric => write!(f, "numeric"),
            ColumnType::Categorical => write!(f, "categorical"),
            ColumnType::Boolean => write!(f, "boolean"),
        }
    }
}

/// Summary statistics for a numeric column.
///
/// Computed over non-missing values only. An empty numeric column reports
/// all zeros rather than NaN, and `std_dev` is 0.0 when fewer than two
/// values exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NumericStats {
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
}

/// Summary statistics for a categorical column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CategoricalStats {
    /// Number of distinct non-missing values
    pub distinct_count: u64,
    /// Most frequent values, descending by count; ties broken by
    /// lexicographic ascending value
    pub top_values: Vec<(String, u64)>,
}

/// Summary statistics for a boolean column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BooleanStats {
    /// Count of true values
    pub true_count: u64,
    /// Count of false values
    pub false_count: u64,
}

/// Type-appropriate statistics for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ColumnStats {
    /// Statistics for a numeric column
    Numeric(NumericStats),
    /// Statistics for a categorical column
    Categorical(CategoricalStats),
    /// Statistics for a boolean column
    Boolean(BooleanStats),
}

/// Structural and statistical summary of one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Column name
    pub name: String,
    /// Inferred type
    pub inferred_type: ColumnType,
    /// Count of missing values
    pub null_count: u64,
    /// Type-appropriate statistics over non-missing values
    pub stats: ColumnStats,
}

/// Structural and statistical summary of a dataset snapshot.
///
/// Produced by the [`Profiler`](super::Profiler); immutable once created and
/// consumed (never mutated) by the drift comparator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetProfile {
    /// Name of the profiled dataset
    pub dataset_name: String,
    /// Number of rows at profiling time
    pub row_count: u64,
    /// Per-column profiles keyed by column name
    pub columns: BTreeMap<String, ColumnProfile>,
    /// Content hash of the dataset at profiling time
    pub fingerprint: String,
    /// When the profile was produced
    pub profiled_at: DateTime<Utc>,
}

impl DatasetProfile {
    /// Checks the profile's internal invariants.
    ///
    /// A profile is sound when its fingerprint is present and no column
    /// reports more missing values than the dataset has rows. Profiles
    /// failing this check were not produced by the profiler and are
    /// rejected by the comparator.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.fingerprint.is_empty() {
            return Err(format!(
                "profile of '{}' has an empty fingerprint",
                self.dataset_name
            ));
        }
        for (name, column) in &self.columns {
            if column.null_count > self.row_count {
                return Err(format!(
                    "profile of '{}': column '{}' reports {} nulls over {} rows",
                    self.dataset_name, name, column.null_count, self.row_count
                ));
            }
        }
        Ok(())
    }

    /// Returns the numeric statistics for a column, if it is numeric.
    pub fn numeric_stats(&self, column: &str) -> Option<&NumericStats> {
        match self.columns.get(column)? {
            ColumnProfile {
                stats: ColumnStats::Numeric(stats),
                ..
            } => Some(stats),
            _ => None,
        }
    }
}
