//! Drift and anomaly comparator.

use crate::dataset::Dataset;
use crate::dedup::find_duplicate_rows;
use crate::error::{DataWardenError, Result};
use crate::profile::DatasetProfile;

use super::config::DriftConfig;
use super::models::{AnomalyFinding, DriftMetric, SchemaChangeKind};

/// Guard against division by zero in relative-shift calculations.
const SHIFT_EPSILON: f64 = 1e-9;

/// Drift and anomaly comparator.
///
/// Compares a baseline profile against a current profile (and optionally the
/// current dataset, for duplicate detection) and emits findings in a fixed
/// order: schema changes (added, removed, type_changed, each sorted by
/// column), statistical drifts (by column, mean before std_dev), volume
/// change, duplicate rows. Inputs are never mutated.
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    config: DriftConfig,
}

impl Comparator {
    /// Creates a new comparator with the given configuration.
    pub fn new(config: DriftConfig) -> Self {
        Self { config }
    }

    /// Creates a new comparator with default thresholds.
    pub fn with_defaults() -> Self {
        Self::new(DriftConfig::default())
    }

    /// Returns a reference to the comparator configuration.
    pub fn config(&self) -> &DriftConfig {
        &self.config
    }

    /// Compares two profiles and returns ordered anomaly findings.
    ///
    /// Columns absent from one side are findings, not errors.
    ///
    /// # Errors
    /// [`DataWardenError::ProfileMismatch`] when either profile violates its
    /// own invariants (it was not produced by the profiler);
    /// [`DataWardenError::Configuration`] when thresholds are invalid.
    pub fn compare(
        &self,
        baseline: &DatasetProfile,
        current: &DatasetProfile,
    ) -> Result<Vec<AnomalyFinding>> {
        self.config.validate()?;

        baseline
            .validate()
            .map_err(|context| DataWardenError::profile_mismatch(format!("baseline {}", context)))?;
        current
            .validate()
            .map_err(|context| DataWardenError::profile_mismatch(format!("current {}", context)))?;

        let mut findings = Vec::new();
        findings.extend(schema_changes(baseline, current));
        findings.extend(self.statistical_drifts(baseline, current));
        findings.extend(self.volume_change(baseline, current));

        tracing::debug!(
            baseline = %baseline.dataset_name,
            current = %current.dataset_name,
            findings = findings.len(),
            "profiles compared"
        );

        Ok(findings)
    }

    /// Compares two profiles and appends a duplicate-rows finding computed
    /// from the current dataset.
    ///
    /// The duplicate finding comes last, preserving the deterministic
    /// ordering of [`compare`](Self::compare).
    pub fn compare_with_dataset(
        &self,
        baseline: &DatasetProfile,
        current: &DatasetProfile,
        current_dataset: &Dataset,
    ) -> Result<Vec<AnomalyFinding>> {
        let mut findings = self.compare(baseline, current)?;

        let count = find_duplicate_rows(current_dataset);
        if count > 0 {
            findings.push(AnomalyFinding::DuplicateRows { count });
        }

        Ok(findings)
    }

    /// Emits statistical drift findings for columns numeric in both
    /// profiles, sorted by column name with mean before std_dev.
    fn statistical_drifts(
        &self,
        baseline: &DatasetProfile,
        current: &DatasetProfile,
    ) -> Vec<AnomalyFinding> {
        let mut findings = Vec::new();

        // BTreeMap iteration is already sorted by column name.
        for (column, baseline_stats) in baseline
            .columns
            .iter()
            .filter_map(|(name, _)| Some((name, baseline.numeric_stats(name)?)))
        {
            let Some(current_stats) = current.numeric_stats(column) else {
                // Non-numeric in current or absent; already a schema finding.
                continue;
            };

            let mean_shift = relative_shift(baseline_stats.mean, current_stats.mean);
            if mean_shift > self.config.mean_shift_threshold {
                findings.push(AnomalyFinding::StatisticalDrift {
                    column: column.clone(),
                    metric: DriftMetric::Mean,
                    baseline_value: baseline_stats.mean,
                    current_value: current_stats.mean,
                    relative_shift: mean_shift,
                });
            }

            let std_shift = relative_shift(baseline_stats.std_dev, current_stats.std_dev);
            if std_shift > self.config.std_dev_shift_threshold {
                findings.push(AnomalyFinding::StatisticalDrift {
                    column: column.clone(),
                    metric: DriftMetric::StdDev,
                    baseline_value: baseline_stats.std_dev,
                    current_value: current_stats.std_dev,
                    relative_shift: std_shift,
                });
            }
        }

        findings
    }

    /// Emits a volume change finding when the row count shifted beyond the
    /// threshold.
    fn volume_change(
        &self,
        baseline: &DatasetProfile,
        current: &DatasetProfile,
    ) -> Option<AnomalyFinding> {
        let baseline_rows = baseline.row_count;
        let current_rows = current.row_count;

        let delta = current_rows.abs_diff(baseline_rows) as f64;
        let relative_change = delta / (baseline_rows.max(1) as f64);

        if relative_change > self.config.row_count_shift_threshold {
            Some(AnomalyFinding::VolumeChange {
                baseline_rows,
                current_rows,
                relative_change,
            })
        } else {
            None
        }
    }
}

/// Relative shift between a baseline and current value, guarded against
/// division by zero.
fn relative_shift(baseline: f64, current: f64) -> f64 {
    (current - baseline).abs() / baseline.abs().max(SHIFT_EPSILON)
}

/// Diffs the column sets of two profiles by exact, case-sensitive name.
///
/// Findings are grouped added, then removed, then type_changed; each group
/// is sorted by column name (free, since profile columns live in BTreeMaps).
fn schema_changes(baseline: &DatasetProfile, current: &DatasetProfile) -> Vec<AnomalyFinding> {
    let mut added = Vec::new();
    let mut type_changed = Vec::new();

    for (name, current_column) in &current.columns {
        match baseline.columns.get(name) {
            None => added.push(AnomalyFinding::SchemaChange {
                kind: SchemaChangeKind::Added,
                column: name.clone(),
                old_type: None,
                new_type: Some(current_column.inferred_type),
            }),
            Some(baseline_column) => {
                if baseline_column.inferred_type != current_column.inferred_type {
                    type_changed.push(AnomalyFinding::SchemaChange {
                        kind: SchemaChangeKind::TypeChanged,
                        column: name.clone(),
                        old_type: Some(baseline_column.inferred_type),
                        new_type: Some(current_column.inferred_type),
                    });
                }
            }
        }
    }

    let removed = baseline
        .columns
        .iter()
        .filter(|(name, _)| !current.columns.contains_key(*name))
        .map(|(name, column)| AnomalyFinding::SchemaChange {
            kind: SchemaChangeKind::Removed,
            column: name.clone(),
            old_type: Some(column.inferred_type),
            new_type: None,
        });

    let mut findings = added;
    findings.extend(removed);
    findings.extend(type_changed);
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, Row, Value};
    use crate::profile::{ColumnType, Profiler};

    fn dataset(name: &str, amounts: &[f64]) -> Dataset {
        Dataset::from_rows(
            name,
            vec!["amount".to_string()],
            amounts.iter().map(|a| Row(vec![Value::Real(*a)])).collect(),
        )
        .unwrap()
    }

    fn profile_of(dataset: &Dataset) -> DatasetProfile {
        Profiler::with_defaults().profile(dataset).unwrap()
    }

    #[test]
    fn test_compare_profile_with_itself_is_empty() {
        let profile = profile_of(&dataset("d", &[1.0, 2.0, 3.0]));
        let findings = Comparator::with_defaults()
            .compare(&profile, &profile)
            .unwrap();
        assert!(findings.is_empty());
    }

    #[test]
    fn test_mean_drift_above_threshold() {
        let baseline = profile_of(&dataset("base", &[100.0, 100.0, 100.0]));
        let current = profile_of(&dataset("cur", &[130.0, 130.0, 130.0]));

        let findings = Comparator::with_defaults()
            .compare(&baseline, &current)
            .unwrap();

        let drift = findings
            .iter()
            .find(|f| {
                matches!(
                    f,
                    AnomalyFinding::StatisticalDrift {
                        metric: DriftMetric::Mean,
                        ..
                    }
                )
            })
            .expect("expected a mean drift finding");

        if let AnomalyFinding::StatisticalDrift { relative_shift, .. } = drift {
            assert!((relative_shift - 0.30).abs() < 1e-9);
        }
    }

    #[test]
    fn test_mean_shift_below_threshold_is_quiet() {
        let baseline = profile_of(&dataset("base", &[100.0, 100.0]));
        let current = profile_of(&dataset("cur", &[105.0, 105.0]));

        let findings = Comparator::with_defaults()
            .compare(&baseline, &current)
            .unwrap();

        assert!(
            !findings
                .iter()
                .any(|f| matches!(f, AnomalyFinding::StatisticalDrift { .. }))
        );
    }

    #[test]
    fn test_std_dev_drift_reported_after_mean() {
        // mean 150 -> 300 (shift 1.0); population std 50 -> 100 (shift 1.0)
        let baseline = profile_of(&dataset("base", &[100.0, 200.0]));
        let current = profile_of(&dataset("cur", &[200.0, 400.0]));

        let findings = Comparator::with_defaults()
            .compare(&baseline, &current)
            .unwrap();

        assert!(matches!(
            findings[0],
            AnomalyFinding::StatisticalDrift {
                metric: DriftMetric::Mean,
                ..
            }
        ));
        match &findings[1] {
            AnomalyFinding::StatisticalDrift {
                metric: DriftMetric::StdDev,
                baseline_value,
                current_value,
                relative_shift,
                ..
            } => {
                assert!((baseline_value - 50.0).abs() < 1e-9);
                assert!((current_value - 100.0).abs() < 1e-9);
                assert!((relative_shift - 1.0).abs() < 1e-9);
            }
            other => panic!("expected std-dev drift, got {:?}", other),
        }
    }

    #[test]
    fn test_std_dev_drift_alone_when_mean_is_stable() {
        // Both runs share mean 105; std moves 5 -> 20 (shift 3.0)
        let baseline = profile_of(&dataset("base", &[100.0, 110.0]));
        let current = profile_of(&dataset("cur", &[85.0, 125.0]));

        let findings = Comparator::with_defaults()
            .compare(&baseline, &current)
            .unwrap();

        let drifts: Vec<_> = findings
            .iter()
            .filter(|f| matches!(f, AnomalyFinding::StatisticalDrift { .. }))
            .collect();
        assert_eq!(drifts.len(), 1);
        assert!(matches!(
            drifts[0],
            AnomalyFinding::StatisticalDrift {
                metric: DriftMetric::StdDev,
                ..
            }
        ));
    }

    #[test]
    fn test_schema_diff_added_and_removed() {
        let baseline = profile_of(
            &Dataset::from_rows(
                "base",
                vec!["a".to_string(), "b".to_string()],
                vec![Row(vec![Value::Integer(1), Value::Integer(2)])],
            )
            .unwrap(),
        );
        let current = profile_of(
            &Dataset::from_rows(
                "cur",
                vec!["b".to_string(), "c".to_string()],
                vec![Row(vec![Value::Integer(2), Value::Integer(3)])],
            )
            .unwrap(),
        );

        let findings = Comparator::with_defaults()
            .compare(&baseline, &current)
            .unwrap();

        let schema: Vec<_> = findings
            .iter()
            .filter(|f| matches!(f, AnomalyFinding::SchemaChange { .. }))
            .collect();
        assert_eq!(schema.len(), 2);

        assert!(matches!(
            schema[0],
            AnomalyFinding::SchemaChange {
                kind: SchemaChangeKind::Added,
                ref column,
                ..
            } if column == "c"
        ));
        assert!(matches!(
            schema[1],
            AnomalyFinding::SchemaChange {
                kind: SchemaChangeKind::Removed,
                ref column,
                ..
            } if column == "a"
        ));
    }

    #[test]
    fn test_type_change_detected() {
        let baseline = profile_of(
            &Dataset::from_rows(
                "base",
                vec!["v".to_string()],
                vec![Row(vec![Value::Integer(1)])],
            )
            .unwrap(),
        );
        let current = profile_of(
            &Dataset::from_rows(
                "cur",
                vec!["v".to_string()],
                vec![Row(vec![Value::Text("hello".to_string())])],
            )
            .unwrap(),
        );

        let findings = Comparator::with_defaults()
            .compare(&baseline, &current)
            .unwrap();

        assert!(findings.iter().any(|f| matches!(
            f,
            AnomalyFinding::SchemaChange {
                kind: SchemaChangeKind::TypeChanged,
                old_type: Some(ColumnType::Numeric),
                new_type: Some(ColumnType::Categorical),
                ..
            }
        )));
    }

    #[test]
    fn test_volume_change_detection() {
        let baseline = profile_of(&dataset("base", &[1.0, 2.0, 3.0, 4.0]));
        let current = profile_of(&dataset("cur", &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]));

        // 50% growth exceeds the 20% default threshold
        let findings = Comparator::with_defaults()
            .compare(&baseline, &current)
            .unwrap();

        assert!(findings.iter().any(|f| matches!(
            f,
            AnomalyFinding::VolumeChange {
                baseline_rows: 4,
                current_rows: 6,
                ..
            }
        )));
    }

    #[test]
    fn test_empty_baseline_volume_uses_floor_of_one() {
        let baseline = profile_of(&dataset("base", &[]));
        let current = profile_of(&dataset("cur", &[1.0, 2.0]));

        let findings = Comparator::with_defaults()
            .compare(&baseline, &current)
            .unwrap();

        let volume = findings
            .iter()
            .find(|f| matches!(f, AnomalyFinding::VolumeChange { .. }))
            .expect("expected a volume finding");
        if let AnomalyFinding::VolumeChange {
            relative_change, ..
        } = volume
        {
            assert!((relative_change - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_duplicate_rows_appended_last() {
        let current_dataset = Dataset::from_rows(
            "cur",
            vec!["id".to_string(), "name".to_string()],
            vec![
                Row(vec![Value::Integer(1), Value::Text("a".to_string())]),
                Row(vec![Value::Integer(2), Value::Text("b".to_string())]),
                Row(vec![Value::Integer(1), Value::Text("a".to_string())]),
            ],
        )
        .unwrap();

        let baseline = profile_of(&current_dataset);
        let current = profile_of(&current_dataset);

        let findings = Comparator::with_defaults()
            .compare_with_dataset(&baseline, &current, &current_dataset)
            .unwrap();

        assert_eq!(
            findings.last(),
            Some(&AnomalyFinding::DuplicateRows { count: 1 })
        );
    }

    #[test]
    fn test_ordering_is_deterministic() {
        let baseline = profile_of(
            &Dataset::from_rows(
                "base",
                vec!["a".to_string(), "m".to_string(), "z".to_string()],
                vec![Row(vec![
                    Value::Real(100.0),
                    Value::Real(50.0),
                    Value::Integer(1),
                ])],
            )
            .unwrap(),
        );
        let current = profile_of(
            &Dataset::from_rows(
                "cur",
                vec!["m".to_string(), "z".to_string(), "q".to_string()],
                vec![Row(vec![
                    Value::Real(100.0),
                    Value::Text("x".to_string()),
                    Value::Integer(2),
                ])],
            )
            .unwrap(),
        );

        let comparator = Comparator::with_defaults();
        let first = comparator.compare(&baseline, &current).unwrap();
        let second = comparator.compare(&baseline, &current).unwrap();
        assert_eq!(first, second);

        // Schema group order: added before removed before type_changed
        let kinds: Vec<_> = first
            .iter()
            .filter_map(|f| match f {
                AnomalyFinding::SchemaChange { kind, .. } => Some(*kind),
                _ => None,
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                SchemaChangeKind::Added,
                SchemaChangeKind::Removed,
                SchemaChangeKind::TypeChanged
            ]
        );
    }

    #[test]
    fn test_unsound_profile_rejected() {
        let sound = profile_of(&dataset("d", &[1.0]));
        let mut broken = sound.clone();
        broken.fingerprint = String::new();

        let result = Comparator::with_defaults().compare(&broken, &sound);
        assert!(matches!(
            result,
            Err(DataWardenError::ProfileMismatch { .. })
        ));
    }

    #[test]
    fn test_relative_shift_zero_baseline_guarded() {
        let shift = relative_shift(0.0, 1.0);
        assert!(shift.is_finite());
        assert!(shift > 0.0);
    }
}
