//! Tabular data model.
//!
//! A [`Dataset`] is an ordered sequence of rows sharing one column set. Each
//! cell is a tagged [`Value`] so that every component of the engine can
//! pattern-match exhaustively instead of coercing at runtime. Datasets are
//! produced by an external loader; this crate is agnostic to the original
//! file format.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{DataWardenError, Result};

/// Unit separator used when joining cell encodings into a row key.
const CELL_SEPARATOR: char = '\u{1f}';

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    /// Signed integer value
    Integer(i64),
    /// Floating-point value
    Real(f64),
    /// Text value
    Text(String),
    /// Boolean value
    Boolean(bool),
    /// Missing value (null or empty marker in the source)
    Missing,
}

impl Value {
    /// Returns true for missing cells.
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Extracts a finite numeric value, if this cell has one.
    ///
    /// Text cells are parsed; non-finite results such as "NaN" or "inf" are
    /// rejected so they cannot poison statistical calculations.
    pub fn as_numeric(&self) -> Option<f64> {
        let numeric = match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Real(r) => Some(*r),
            Value::Text(s) => s.trim().parse::<f64>().ok(),
            Value::Boolean(_) | Value::Missing => None,
        };
        match numeric {
            Some(v) if v.is_finite() => Some(v),
            _ => None,
        }
    }

    /// Extracts a boolean, accepting the fixed token set "true"/"false"
    /// (ASCII case-insensitive) for text cells.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            Value::Text(s) => {
                if s.eq_ignore_ascii_case("true") {
                    Some(true)
                } else if s.eq_ignore_ascii_case("false") {
                    Some(false)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Returns the text content of this cell, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Canonical encoding used for exact-equality comparison.
    ///
    /// Tag-prefixed so that cells of different types never collide
    /// (`Integer(1)` and `Text("1")` encode differently).
    fn canonical_encoding(&self) -> String {
        match self {
            Value::Integer(i) => format!("i:{}", i),
            Value::Real(r) => format!("r:{}", r),
            Value::Text(s) => format!("t:{}", s),
            Value::Boolean(b) => format!("b:{}", b),
            Value::Missing => "m:".to_string(),
        }
    }

    /// Display form used in categorical frequency tables.
    pub fn display(&self) -> String {
        match self {
            Value::Integer(i) => i.to_string(),
            Value::Real(r) => r.to_string(),
            Value::Text(s) => s.clone(),
            Value::Boolean(b) => b.to_string(),
            Value::Missing => String::new(),
        }
    }
}

/// A single row, positionally aligned with [`Dataset::columns`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row(pub Vec<Value>);

impl Row {
    /// Canonical key for exact full-row equality.
    ///
    /// Two rows are duplicates exactly when their canonical keys are equal.
    /// Shared by the drift comparator's duplicate count and the
    /// deduplicator so the two cannot disagree.
    pub fn canonical_key(&self) -> String {
        let mut key = String::new();
        for (index, value) in self.0.iter().enumerate() {
            if index > 0 {
                key.push(CELL_SEPARATOR);
            }
            key.push_str(&value.canonical_encoding());
        }
        key
    }

    /// Returns the number of cells in this row.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// An in-memory tabular dataset.
///
/// All rows share the column set in `columns`; column order is stable but
/// carries no semantics. Construction enforces unique column names and a
/// consistent row width, so downstream components never re-validate shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Identifier for the dataset (typically the source path or table name)
    pub name: String,
    /// Ordered column names, unique within the dataset
    pub columns: Vec<String>,
    /// Rows, each aligned with `columns`
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Creates an empty dataset with the given column set.
    ///
    /// # Errors
    /// Returns [`DataWardenError::DataAccess`] if a column name repeats.
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Result<Self> {
        let name = name.into();
        for (index, column) in columns.iter().enumerate() {
            if columns[..index].contains(column) {
                return Err(DataWardenError::data_access(
                    &name,
                    format!("duplicate column name '{}'", column),
                ));
            }
        }
        Ok(Self {
            name,
            columns,
            rows: Vec::new(),
        })
    }

    /// Appends a row, enforcing the column width.
    ///
    /// # Errors
    /// Returns [`DataWardenError::DataAccess`] identifying the offending row
    /// when its width does not match the column set.
    pub fn push_row(&mut self, row: Row) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(DataWardenError::data_access(
                &self.name,
                format!(
                    "row {} has {} values, expected {}",
                    self.rows.len(),
                    row.len(),
                    self.columns.len()
                ),
            ));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Builds a dataset from pre-assembled rows.
    pub fn from_rows(
        name: impl Into<String>,
        columns: Vec<String>,
        rows: Vec<Row>,
    ) -> Result<Self> {
        let mut dataset = Self::new(name, columns)?;
        for row in rows {
            dataset.push_row(row)?;
        }
        Ok(dataset)
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of a column by name.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Iterates over the values of one column, by column index.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().filter_map(move |row| row.0.get(index))
    }

    /// Content fingerprint of the dataset at this moment.
    ///
    /// A sha256 over the column header and every canonical row encoding, in
    /// order. Stable across runs: identical content yields an identical
    /// fingerprint, usable as a memoization key by callers.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.columns.join("\u{1f}").as_bytes());
        hasher.update([0u8]);
        for row in &self.rows {
            hasher.update(row.canonical_key().as_bytes());
            hasher.update([0u8]);
        }
        hex::encode(hasher.finalize())
    }
}
