//! Governance report compilation.
//!
//! The report compiler is pure aggregation: it assembles the outputs of the
//! profiler, comparator, PII scanner, and deduplicator into one serializable
//! record, stamps it, and hands ownership to the caller. Persistence is the
//! caller's concern; this crate never writes the report anywhere.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::compliance::{ComplianceFinding, PII_DISCLAIMER};
use crate::drift::AnomalyFinding;
use crate::error::{DataWardenError, Result};
use crate::lineage::{lineage_graph, LineageGraph};
use crate::profile::DatasetProfile;

/// Summary of the deduplication step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DedupSummary {
    /// Number of exact-duplicate rows removed
    pub rows_removed: u64,
    /// Caller-supplied reference to the cleaned artifact
    pub cleaned_dataset_ref: String,
}

/// Consolidated governance record for one run.
///
/// Write-once: created by [`ReportBuilder::build`] and owned by the caller
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovernanceReport {
    /// Unique identifier for this report
    pub report_id: Uuid,
    /// When the report was compiled
    pub generated_at: DateTime<Utc>,
    /// Profile of the trusted baseline dataset
    pub baseline_profile: DatasetProfile,
    /// Profile of the newly observed dataset
    pub current_profile: DatasetProfile,
    /// Ordered anomaly findings from the drift comparator
    pub anomalies: Vec<AnomalyFinding>,
    /// Ordered compliance findings from the PII scanner
    pub compliance_issues: Vec<ComplianceFinding>,
    /// Caveat on the heuristic nature of PII scanning
    pub compliance_disclaimer: String,
    /// Deduplication outcome
    pub dedup_summary: DedupSummary,
    /// Artifact lineage for this run
    pub lineage: LineageGraph,
}

/// Builder assembling a [`GovernanceReport`] from component outputs.
///
/// Every input is required; [`build`](Self::build) fails with
/// [`DataWardenError::IncompleteReport`] naming the first missing field.
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    baseline_profile: Option<DatasetProfile>,
    current_profile: Option<DatasetProfile>,
    anomalies: Option<Vec<AnomalyFinding>>,
    compliance_issues: Option<Vec<ComplianceFinding>>,
    dedup_summary: Option<DedupSummary>,
}

impl ReportBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the baseline profile.
    pub fn with_baseline_profile(mut self, profile: DatasetProfile) -> Self {
        self.baseline_profile = Some(profile);
        self
    }

    /// Sets the current profile.
    pub fn with_current_profile(mut self, profile: DatasetProfile) -> Self {
        self.current_profile = Some(profile);
        self
    }

    /// Sets the anomaly findings.
    pub fn with_anomalies(mut self, anomalies: Vec<AnomalyFinding>) -> Self {
        self.anomalies = Some(anomalies);
        self
    }

    /// Sets the compliance findings.
    pub fn with_compliance_issues(mut self, issues: Vec<ComplianceFinding>) -> Self {
        self.compliance_issues = Some(issues);
        self
    }

    /// Sets the deduplication summary.
    pub fn with_dedup_summary(mut self, summary: DedupSummary) -> Self {
        self.dedup_summary = Some(summary);
        self
    }

    /// Compiles the report.
    ///
    /// # Errors
    /// [`DataWardenError::IncompleteReport`] when any required input was
    /// never supplied.
    pub fn build(self) -> Result<GovernanceReport> {
        let baseline_profile = self
            .baseline_profile
            .ok_or_else(|| DataWardenError::incomplete_report("baseline_profile"))?;
        let current_profile = self
            .current_profile
            .ok_or_else(|| DataWardenError::incomplete_report("current_profile"))?;
        let anomalies = self
            .anomalies
            .ok_or_else(|| DataWardenError::incomplete_report("anomalies"))?;
        let compliance_issues = self
            .compliance_issues
            .ok_or_else(|| DataWardenError::incomplete_report("compliance_issues"))?;
        let dedup_summary = self
            .dedup_summary
            .ok_or_else(|| DataWardenError::incomplete_report("dedup_summary"))?;

        let lineage = lineage_graph(
            &baseline_profile.dataset_name,
            &current_profile.dataset_name,
            &dedup_summary.cleaned_dataset_ref,
        );

        let report = GovernanceReport {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            baseline_profile,
            current_profile,
            anomalies,
            compliance_issues,
            compliance_disclaimer: PII_DISCLAIMER.to_string(),
            dedup_summary,
            lineage,
        };

        tracing::info!(
            report_id = %report.report_id,
            anomalies = report.anomalies.len(),
            compliance_issues = report.compliance_issues.len(),
            "governance report compiled"
        );

        Ok(report)
    }
}
