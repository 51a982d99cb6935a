//! Profiling, drift detection, deduplication, and PII scanning for tabular
//! governance.
//!
//! This crate is the engine behind a dataset governance pipeline: it profiles
//! a tabular dataset, compares a trusted baseline profile against a newly
//! observed one, scans for unmasked PII, removes exact-duplicate rows, and
//! compiles everything into one serializable [`GovernanceReport`].
//!
//! # Architecture
//! Every component is a pure function over its inputs:
//! - [`profile::Profiler`] turns a [`dataset::Dataset`] into an immutable
//!   [`profile::DatasetProfile`]
//! - [`drift::Comparator`] compares two profiles into ordered findings
//! - [`compliance::PiiScanner`] scans text columns for unmasked patterns
//! - [`dedup::deduplicate`] materializes a cleaned dataset
//! - [`report::ReportBuilder`] aggregates the outputs into a report
//!
//! Nothing here touches the network or the filesystem; datasets arrive from
//! an external loader and the report is handed back for external
//! persistence. Because each step is a pure function, callers may profile
//! the baseline and current datasets concurrently and join before
//! comparison.
//!
//! [`GovernanceReport`]: report::GovernanceReport

pub mod compliance;
pub mod dataset;
pub mod dedup;
pub mod drift;
pub mod error;
pub mod lineage;
pub mod logging;
pub mod profile;
pub mod report;

// Re-export commonly used types
pub use compliance::{ComplianceFinding, PiiConfig, PiiScanner, PII_DISCLAIMER};
pub use dataset::{Dataset, Row, Value};
pub use dedup::{deduplicate, find_duplicate_rows};
pub use drift::{AnomalyFinding, Comparator, DriftConfig, DriftMetric, SchemaChangeKind};
pub use error::{DataWardenError, Result};
pub use profile::{ColumnProfile, ColumnType, DatasetProfile, Profiler, ProfilerConfig};
pub use report::{DedupSummary, GovernanceReport, ReportBuilder};
