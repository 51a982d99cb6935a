//! Drift comparison configuration.
//!
//! Thresholds are policy values supplied by the caller, not hard-wired
//! behavior; the defaults below are documented starting points.

use serde::{Deserialize, Serialize};

use crate::error::{DataWardenError, Result};

/// Default relative-shift threshold for all three knobs.
const DEFAULT_SHIFT_THRESHOLD: f64 = 0.20;

/// Drift comparison configuration.
///
/// A finding is emitted when a relative shift is strictly greater than the
/// corresponding threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftConfig {
    /// Relative shift threshold for column means
    pub mean_shift_threshold: f64,
    /// Relative shift threshold for column standard deviations
    pub std_dev_shift_threshold: f64,
    /// Relative change threshold for row counts
    pub row_count_shift_threshold: f64,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            mean_shift_threshold: DEFAULT_SHIFT_THRESHOLD,
            std_dev_shift_threshold: DEFAULT_SHIFT_THRESHOLD,
            row_count_shift_threshold: DEFAULT_SHIFT_THRESHOLD,
        }
    }
}

impl DriftConfig {
    /// Creates a new drift config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the mean shift threshold.
    pub fn with_mean_shift_threshold(mut self, threshold: f64) -> Self {
        if threshold < 0.0 {
            tracing::warn!("mean_shift_threshold {} clamped to 0.0", threshold);
        }
        self.mean_shift_threshold = threshold.max(0.0);
        self
    }

    /// Builder method to set the standard deviation shift threshold.
    pub fn with_std_dev_shift_threshold(mut self, threshold: f64) -> Self {
        if threshold < 0.0 {
            tracing::warn!("std_dev_shift_threshold {} clamped to 0.0", threshold);
        }
        self.std_dev_shift_threshold = threshold.max(0.0);
        self
    }

    /// Builder method to set the row count shift threshold.
    pub fn with_row_count_shift_threshold(mut self, threshold: f64) -> Self {
        if threshold < 0.0 {
            tracing::warn!("row_count_shift_threshold {} clamped to 0.0", threshold);
        }
        self.row_count_shift_threshold = threshold.max(0.0);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns an error if any threshold is negative or non-finite.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("mean_shift_threshold", self.mean_shift_threshold),
            ("std_dev_shift_threshold", self.std_dev_shift_threshold),
            ("row_count_shift_threshold", self.row_count_shift_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DataWardenError::configuration(format!(
                    "{} must be a finite value >= 0.0, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
