//! Drift and anomaly comparison.
//!
//! This module compares a trusted baseline [`DatasetProfile`] against a
//! newly observed one and surfaces schema changes, statistical shifts,
//! volume changes, and duplicate rows as ordered [`AnomalyFinding`]s. The
//! output ordering is deterministic: two runs over identical inputs produce
//! identical sequences.
//!
//! [`DatasetProfile`]: crate::profile::DatasetProfile

mod comparator;
mod config;
mod models;

pub use comparator::Comparator;
pub use config::DriftConfig;
pub use models::{AnomalyFinding, DriftMetric, SchemaChangeKind};
