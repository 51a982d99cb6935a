//! Error types for the governance engine.
//!
//! Every fatal error names the dataset or field it concerns so that callers
//! can surface the message verbatim. The engine performs no retries; retry
//! policy belongs to the orchestration layer above.

use thiserror::Error;

/// Main error type for datawarden operations.
#[derive(Debug, Error)]
pub enum DataWardenError {
    /// Dataset could not be read or is structurally malformed.
    ///
    /// Fatal to the calling step. The message identifies the offending
    /// dataset (and column, where known).
    #[error("Dataset access failed for '{dataset}': {context}")]
    DataAccess {
        /// Name of the dataset that could not be read
        dataset: String,
        /// What went wrong
        context: String,
    },

    /// Structurally incompatible profiles were passed to the comparator.
    ///
    /// Indicates caller misuse: one of the profiles was never produced by
    /// the profiler or violates its own invariants. Columns missing from
    /// either profile are findings, not errors.
    #[error("Profile mismatch: {context}")]
    ProfileMismatch {
        /// Which profile is unsound and why
        context: String,
    },

    /// A required input was absent when compiling the governance report.
    #[error("Governance report incomplete: missing {missing}")]
    IncompleteReport {
        /// Name of the missing report field
        missing: String,
    },

    /// Configuration or validation error.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the invalid configuration
        message: String,
    },
}

/// Convenience type alias for Results with [`DataWardenError`].
pub type Result<T> = std::result::Result<T, DataWardenError>;

impl DataWardenError {
    /// Creates a dataset access error naming the offending dataset.
    pub fn data_access(dataset: impl Into<String>, context: impl Into<String>) -> Self {
        Self::DataAccess {
            dataset: dataset.into(),
            context: context.into(),
        }
    }

    /// Creates a profile mismatch error.
    pub fn profile_mismatch(context: impl Into<String>) -> Self {
        Self::ProfileMismatch {
            context: context.into(),
        }
    }

    /// Creates an incomplete report error naming the missing field.
    pub fn incomplete_report(missing: impl Into<String>) -> Self {
        Self::IncompleteReport {
            missing: missing.into(),
        }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
