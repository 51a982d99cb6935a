//! Profiler facade.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::error::{DataWardenError, Result};

use super::inference::infer_column_type;
use super::models::{ColumnProfile, ColumnStats, ColumnType, DatasetProfile};
use super::statistics::{boolean_summary, categorical_summary, numeric_summary};

/// Default number of frequent values retained per categorical column.
const DEFAULT_TOP_VALUES: usize = 5;

/// Profiler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilerConfig {
    /// Number of most-frequent values to retain for categorical columns
    pub top_values: usize,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            top_values: DEFAULT_TOP_VALUES,
        }
    }
}

impl ProfilerConfig {
    /// Creates a new profiler config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the top-values depth.
    pub fn with_top_values(mut self, top_values: usize) -> Self {
        self.top_values = top_values;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.top_values == 0 {
            return Err(DataWardenError::configuration(
                "top_values must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Schema and statistics profiler.
///
/// Produces a [`DatasetProfile`] from a dataset: per-column inferred type,
/// missing-value count, and type-appropriate statistics over the non-missing
/// values. Never fails on empty datasets.
#[derive(Debug, Clone, Default)]
pub struct Profiler {
    config: ProfilerConfig,
}

impl Profiler {
    /// Creates a new profiler with the given configuration.
    pub fn new(config: ProfilerConfig) -> Self {
        Self { config }
    }

    /// Creates a new profiler with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ProfilerConfig::default())
    }

    /// Returns a reference to the profiler configuration.
    pub fn config(&self) -> &ProfilerConfig {
        &self.config
    }

    /// Profiles a dataset.
    ///
    /// For each column: infer the type from non-missing values, count
    /// missing values, and compute statistics appropriate to the type.
    /// An empty dataset profiles to `row_count = 0` with zero-count columns.
    pub fn profile(&self, dataset: &Dataset) -> Result<DatasetProfile> {
        self.config.validate()?;

        let row_count = dataset.row_count() as u64;
        let mut columns = std::collections::BTreeMap::new();

        for (index, name) in dataset.columns.iter().enumerate() {
            let profile = self.profile_column(dataset, index, name, row_count);
            columns.insert(name.clone(), profile);
        }

        tracing::debug!(
            dataset = %dataset.name,
            rows = row_count,
            columns = columns.len(),
            "dataset profiled"
        );

        Ok(DatasetProfile {
            dataset_name: dataset.name.clone(),
            row_count,
            columns,
            fingerprint: dataset.fingerprint(),
            profiled_at: Utc::now(),
        })
    }

    fn profile_column(
        &self,
        dataset: &Dataset,
        index: usize,
        name: &str,
        row_count: u64,
    ) -> ColumnProfile {
        let null_count = dataset
            .column_values(index)
            .filter(|v| v.is_missing())
            .count() as u64;

        debug_assert!(null_count <= row_count);

        let inferred_type =
            infer_column_type(dataset.column_values(index).filter(|v| !v.is_missing()));

        let stats = match inferred_type {
            ColumnType::Numeric => {
                let values: Vec<f64> = dataset
                    .column_values(index)
                    .filter_map(|v| v.as_numeric())
                    .collect();
                ColumnStats::Numeric(numeric_summary(&values))
            }
            ColumnType::Boolean => {
                let values = dataset
                    .column_values(index)
                    .filter_map(|v| v.as_boolean());
                ColumnStats::Boolean(boolean_summary(values))
            }
            ColumnType::Categorical => {
                let values = dataset
                    .column_values(index)
                    .filter(|v| !v.is_missing())
                    .map(|v| v.display());
                ColumnStats::Categorical(categorical_summary(values, self.config.top_values))
            }
        };

        ColumnProfile {
            name: name.to_string(),
            inferred_type,
            null_count,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Row, Value};

    fn sample_dataset() -> Dataset {
        Dataset::from_rows(
            "orders",
            vec![
                "amount".to_string(),
                "status".to_string(),
                "paid".to_string(),
            ],
            vec![
                Row(vec![
                    Value::Real(10.0),
                    Value::Text("open".to_string()),
                    Value::Boolean(true),
                ]),
                Row(vec![
                    Value::Real(20.0),
                    Value::Text("closed".to_string()),
                    Value::Boolean(false),
                ]),
                Row(vec![
                    Value::Missing,
                    Value::Text("open".to_string()),
                    Value::Boolean(true),
                ]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_profile_row_count_matches_dataset() {
        let profile = Profiler::with_defaults()
            .profile(&sample_dataset())
            .unwrap();
        assert_eq!(profile.row_count, 3);
    }

    #[test]
    fn test_profile_types_and_null_counts() {
        let profile = Profiler::with_defaults()
            .profile(&sample_dataset())
            .unwrap();

        let amount = &profile.columns["amount"];
        assert_eq!(amount.inferred_type, ColumnType::Numeric);
        assert_eq!(amount.null_count, 1);

        let status = &profile.columns["status"];
        assert_eq!(status.inferred_type, ColumnType::Categorical);
        assert_eq!(status.null_count, 0);

        let paid = &profile.columns["paid"];
        assert_eq!(paid.inferred_type, ColumnType::Boolean);
    }

    #[test]
    fn test_profile_numeric_stats_skip_missing() {
        let profile = Profiler::with_defaults()
            .profile(&sample_dataset())
            .unwrap();

        let stats = profile.numeric_stats("amount").unwrap();
        assert!((stats.mean - 15.0).abs() < 1e-9);
        assert!((stats.min - 10.0).abs() < 1e-9);
        assert!((stats.max - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_profile_categorical_top_values() {
        let profile = Profiler::with_defaults()
            .profile(&sample_dataset())
            .unwrap();

        match &profile.columns["status"].stats {
            ColumnStats::Categorical(stats) => {
                assert_eq!(stats.distinct_count, 2);
                assert_eq!(stats.top_values[0], ("open".to_string(), 2));
            }
            other => panic!("expected categorical stats, got {:?}", other),
        }
    }

    #[test]
    fn test_profile_empty_dataset() {
        let dataset = Dataset::new("empty", vec!["a".to_string()]).unwrap();
        let profile = Profiler::with_defaults().profile(&dataset).unwrap();

        assert_eq!(profile.row_count, 0);
        let column = &profile.columns["a"];
        assert_eq!(column.null_count, 0);
        assert_eq!(column.inferred_type, ColumnType::Categorical);
    }

    #[test]
    fn test_profile_all_missing_column() {
        let dataset = Dataset::from_rows(
            "sparse",
            vec!["gap".to_string()],
            vec![Row(vec![Value::Missing]), Row(vec![Value::Missing])],
        )
        .unwrap();

        let profile = Profiler::with_defaults().profile(&dataset).unwrap();
        let column = &profile.columns["gap"];
        assert_eq!(column.null_count, 2);
        assert_eq!(column.inferred_type, ColumnType::Categorical);
        match &column.stats {
            ColumnStats::Categorical(stats) => assert_eq!(stats.distinct_count, 0),
            other => panic!("expected categorical stats, got {:?}", other),
        }
    }

    #[test]
    fn test_profile_empty_numeric_column_is_zeroed_not_nan() {
        // A column that is numeric by type but has no non-missing values is
        // categorical by inference; force the numeric path with one value
        // then none via empty dataset instead. The zero-fill rule itself is
        // covered in statistics tests; here we check the profile is sound.
        let dataset = Dataset::from_rows(
            "numbers",
            vec!["n".to_string()],
            vec![Row(vec![Value::Integer(7)])],
        )
        .unwrap();

        let profile = Profiler::with_defaults().profile(&dataset).unwrap();
        let stats = profile.numeric_stats("n").unwrap();
        assert_eq!(stats.std_dev, 0.0);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_profile_fingerprint_present() {
        let profile = Profiler::with_defaults()
            .profile(&sample_dataset())
            .unwrap();
        assert!(!profile.fingerprint.is_empty());
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_profiler_config_validation() {
        let profiler = Profiler::new(ProfilerConfig::new().with_top_values(0));
        let result = profiler.profile(&sample_dataset());
        assert!(matches!(
            result,
            Err(crate::error::DataWardenError::Configuration { .. })
        ));
    }
}
