//! Schema and statistics profiling.
//!
//! This module reads one dataset and produces a [`DatasetProfile`]:
//! per-column inferred type, null count, and type-appropriate statistics.
//! Profiles are immutable once produced and are the sole input to drift
//! comparison.

mod inference;
mod models;
mod profiler;
mod statistics;

pub use inference::infer_column_type;
pub use models::{
    BooleanStats, CategoricalStats, ColumnProfile, ColumnStats, ColumnType, DatasetProfile,
    NumericStats,
};
pub use profiler::{Profiler, ProfilerConfig};
