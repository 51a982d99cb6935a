//! PII compliance scanning.
//!
//! Scans text cells for unmasked identifiable patterns. This is a literal
//! pattern-match heuristic, not an exhaustive PII detector; the
//! [`PII_DISCLAIMER`] constant carries that caveat into user-facing reports.

mod config;
mod scanner;

pub use config::{PiiConfig, PiiPattern, PiiPatternKind};
pub use scanner::{ComplianceFinding, PiiScanner};

/// User-facing caveat attached to every governance report.
pub const PII_DISCLAIMER: &str = "PII scanning is a heuristic string-pattern \
    match over unmasked values; it does not guarantee exhaustive coverage of \
    personally identifiable data.";
