//! PII scanner.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, Value};
use crate::error::{DataWardenError, Result};

use super::config::{PiiConfig, PiiPatternKind};

/// One detected occurrence of unmasked identifiable data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceFinding {
    /// Column containing the value
    pub column: String,
    /// 0-based position of the row in the dataset as read
    pub row_index: usize,
    /// Which pattern matched
    pub pattern: PiiPatternKind,
    /// The matched substring
    pub matched_value: String,
}

/// Compiled PII pattern.
#[derive(Debug, Clone)]
struct CompiledPattern {
    kind: PiiPatternKind,
    regex: Regex,
}

/// Scanner for unmasked identifiable patterns in text columns.
///
/// Values containing the configured mask marker are considered already
/// redacted and are never reported. Non-text cells are skipped and counted,
/// never aborting the scan.
#[derive(Debug, Clone)]
pub struct PiiScanner {
    patterns: Vec<CompiledPattern>,
    mask_marker: char,
}

impl PiiScanner {
    /// Creates a scanner from the given configuration.
    ///
    /// # Errors
    /// [`DataWardenError::Configuration`] when a pattern fails to compile.
    pub fn new(config: &PiiConfig) -> Result<Self> {
        let mut patterns = Vec::with_capacity(config.patterns.len());
        for rule in &config.patterns {
            let regex = Regex::new(&rule.pattern).map_err(|e| {
                DataWardenError::configuration(format!(
                    "invalid {} pattern '{}': {}",
                    rule.kind, rule.pattern, e
                ))
            })?;
            patterns.push(CompiledPattern {
                kind: rule.kind,
                regex,
            });
        }
        Ok(Self {
            patterns,
            mask_marker: config.mask_marker,
        })
    }

    /// Creates a scanner with the default pattern set.
    ///
    /// # Errors
    /// Propagates pattern compilation failures; never degrades to a
    /// scanner that silently matches nothing.
    pub fn with_defaults() -> Result<Self> {
        Self::new(&PiiConfig::default())
    }

    /// Scans every text cell of the dataset.
    ///
    /// Findings are ordered by row, then by column position, then by
    /// pattern order, then by match position within the value, so repeated
    /// scans of the same dataset yield identical sequences.
    pub fn scan(&self, dataset: &Dataset) -> Vec<ComplianceFinding> {
        let mut findings = Vec::new();
        let mut skipped: u64 = 0;

        for (row_index, row) in dataset.rows.iter().enumerate() {
            for (column_index, value) in row.0.iter().enumerate() {
                let text = match value {
                    Value::Text(s) => s,
                    Value::Missing => continue,
                    _ => {
                        skipped += 1;
                        continue;
                    }
                };

                if text.contains(self.mask_marker) {
                    continue;
                }

                for pattern in &self.patterns {
                    for matched in pattern.regex.find_iter(text) {
                        findings.push(ComplianceFinding {
                            column: dataset.columns[column_index].clone(),
                            row_index,
                            pattern: pattern.kind,
                            matched_value: matched.as_str().to_string(),
                        });
                    }
                }
            }
        }

        tracing::debug!(
            dataset = %dataset.name,
            findings = findings.len(),
            non_text_cells_skipped = skipped,
            "PII scan complete"
        );

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Row;

    fn contact_dataset(values: Vec<Value>) -> Dataset {
        Dataset::from_rows(
            "contacts",
            vec!["contact".to_string()],
            values.into_iter().map(|v| Row(vec![v])).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_unmasked_email_is_reported_with_row_index() {
        let dataset = contact_dataset(vec![
            Value::Text("no pii here".to_string()),
            Value::Text("jane.doe@example.com".to_string()),
        ]);

        let findings = PiiScanner::with_defaults().unwrap().scan(&dataset);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].row_index, 1);
        assert_eq!(findings[0].column, "contact");
        assert_eq!(findings[0].pattern, PiiPatternKind::Email);
        assert_eq!(findings[0].matched_value, "jane.doe@example.com");
    }

    #[test]
    fn test_masked_email_is_not_reported() {
        let dataset = contact_dataset(vec![Value::Text("j***@example.com".to_string())]);
        let findings = PiiScanner::with_defaults().unwrap().scan(&dataset);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_embedded_email_detected() {
        let dataset = contact_dataset(vec![Value::Text(
            "reach me at bob@mail.example.org thanks".to_string(),
        )]);

        let findings = PiiScanner::with_defaults().unwrap().scan(&dataset);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].matched_value, "bob@mail.example.org");
    }

    #[test]
    fn test_domain_without_dot_is_not_an_email() {
        let dataset = contact_dataset(vec![Value::Text("user@localhost".to_string())]);
        let findings = PiiScanner::with_defaults().unwrap().scan(&dataset);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_non_text_cells_are_skipped() {
        let dataset = contact_dataset(vec![
            Value::Integer(42),
            Value::Boolean(true),
            Value::Missing,
        ]);

        let findings = PiiScanner::with_defaults().unwrap().scan(&dataset);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_default_patterns_compile() {
        let scanner = PiiScanner::with_defaults();
        assert!(scanner.is_ok());
    }

    #[test]
    fn test_every_occurrence_in_a_cell_is_reported() {
        let dataset = contact_dataset(vec![Value::Text(
            "cc alice@example.com and bob@example.org".to_string(),
        )]);

        let findings = PiiScanner::with_defaults().unwrap().scan(&dataset);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].matched_value, "alice@example.com");
        assert_eq!(findings[1].matched_value, "bob@example.org");
        assert_eq!(findings[0].row_index, findings[1].row_index);
    }

    #[test]
    fn test_findings_ordered_by_row() {
        let dataset = contact_dataset(vec![
            Value::Text("a@example.com".to_string()),
            Value::Text("clean".to_string()),
            Value::Text("b@example.com".to_string()),
        ]);

        let findings = PiiScanner::with_defaults().unwrap().scan(&dataset);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].row_index, 0);
        assert_eq!(findings[1].row_index, 2);
    }

    #[test]
    fn test_invalid_pattern_is_a_configuration_error() {
        let config = PiiConfig::new().with_patterns(vec![super::super::PiiPattern {
            kind: PiiPatternKind::Email,
            pattern: "(unclosed".to_string(),
            description: "broken".to_string(),
        }]);

        let result = PiiScanner::new(&config);
        assert!(matches!(
            result,
            Err(DataWardenError::Configuration { .. })
        ));
    }

    #[test]
    fn test_empty_pattern_set_scans_quietly() {
        let scanner = PiiScanner::new(&PiiConfig::new().with_patterns(vec![])).unwrap();
        let dataset = contact_dataset(vec![Value::Text("jane@example.com".to_string())]);
        assert!(scanner.scan(&dataset).is_empty());
    }
}
