//! PII scanning configuration.
//!
//! The pattern set is policy supplied by the caller; the default covers
//! ASCII email addresses.

use serde::{Deserialize, Serialize};

/// ASCII email pattern: local part, "@", domain containing a dot.
const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+";

/// Character whose presence marks a value as already redacted.
const DEFAULT_MASK_MARKER: char = '*';

/// Kind of identifiable pattern a rule detects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PiiPatternKind {
    /// Email address
    Email,
}

impl std::fmt::Display for PiiPatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PiiPatternKind::Email => write!(f, "email"),
        }
    }
}

/// Pattern for detecting unmasked identifiable data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiiPattern {
    /// What this pattern detects
    pub kind: PiiPatternKind,
    /// Regular expression source
    pub pattern: String,
    /// Human-readable description for findings and logs
    pub description: String,
}

/// PII scanning configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiiConfig {
    /// Patterns to test against each text value
    pub patterns: Vec<PiiPattern>,
    /// Values containing this character are treated as already masked
    pub mask_marker: char,
}

impl Default for PiiConfig {
    fn default() -> Self {
        Self {
            patterns: vec![PiiPattern {
                kind: PiiPatternKind::Email,
                pattern: EMAIL_PATTERN.to_string(),
                description: "Unmasked email address".to_string(),
            }],
            mask_marker: DEFAULT_MASK_MARKER,
        }
    }
}

impl PiiConfig {
    /// Creates a new PII config with the default pattern set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to replace the pattern set.
    pub fn with_patterns(mut self, patterns: Vec<PiiPattern>) -> Self {
        self.patterns = patterns;
        self
    }

    /// Builder method to set the mask marker.
    pub fn with_mask_marker(mut self, marker: char) -> Self {
        self.mask_marker = marker;
        self
    }
}
