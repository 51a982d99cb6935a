//! Anomaly finding models.

use serde::{Deserialize, Serialize};

use crate::profile::ColumnType;

/// Kind of schema change between two profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaChangeKind {
    /// Column present in current but not baseline
    Added,
    /// Column present in baseline but not current
    Removed,
    /// Column present in both with differing inferred types
    TypeChanged,
}

/// Statistical metric that drifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftMetric {
    /// Arithmetic mean
    Mean,
    /// Population standard deviation
    StdDev,
}

/// One anomaly surfaced by comparing two dataset snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "finding", rename_all = "snake_case")]
pub enum AnomalyFinding {
    /// A column was added, removed, or changed type.
    SchemaChange {
        /// What kind of change occurred
        kind: SchemaChangeKind,
        /// The affected column
        column: String,
        /// Type in the baseline profile, when the column existed there
        old_type: Option<ColumnType>,
        /// Type in the current profile, when the column exists there
        new_type: Option<ColumnType>,
    },
    /// A numeric column's distribution shifted beyond the threshold.
    StatisticalDrift {
        /// The affected column
        column: String,
        /// Which metric shifted
        metric: DriftMetric,
        /// Metric value in the baseline profile
        baseline_value: f64,
        /// Metric value in the current profile
        current_value: f64,
        /// Relative magnitude of the shift
        relative_shift: f64,
    },
    /// Exact-duplicate rows exist in the current dataset.
    DuplicateRows {
        /// Number of rows identical to an earlier row
        count: u64,
    },
    /// Row count changed beyond the threshold.
    VolumeChange {
        /// Rows in the baseline profile
        baseline_rows: u64,
        /// Rows in the current profile
        current_rows: u64,
        /// Relative magnitude of the change
        relative_change: f64,
    },
}
