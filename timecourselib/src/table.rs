//! Core tabular data model: cell values, rows, and sample-keyed tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default name of the sample identifier column.
pub const DEFAULT_KEY: &str = "sample_id";

/// A single measurement cell: a number, or the missing-value marker.
///
/// `Missing` is a first-class sentinel, distinct from every numeric value
/// (including `0.0`), so the summarizer can implement `skipna` precisely.
/// It serializes as JSON `null` and renders as an empty CSV field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A recorded numeric measurement
    Number(f64),
    /// No measurement for this (sample, timepoint) pair
    Missing,
}

impl Value {
    /// Check if this is the missing marker.
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// The numeric value, if one is present.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            Value::Missing => None,
        }
    }

    /// The numeric value, with missing cells treated as zero.
    pub fn or_zero(&self) -> f64 {
        self.as_f64().unwrap_or(0.0)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(v) => write!(f, "{v}"),
            Value::Missing => Ok(()),
        }
    }
}

/// One sample's row: identifier plus one cell per value column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Sample identifier
    pub key: String,
    /// Cells, in the owning table's column order
    pub values: Vec<Value>,
}

/// An ordered table keyed by a sample identifier column.
///
/// A loaded table carries exactly one value column (the timepoint label);
/// a merged table carries one value column per timepoint, in processing
/// order. Tables are never mutated once a pipeline stage has produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    key: String,
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with the given key column and value columns.
    pub fn new(key: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            key: key.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row. `values` must have one cell per value column.
    pub fn push_row(&mut self, key: String, values: Vec<Value>) {
        debug_assert_eq!(values.len(), self.columns.len());
        self.rows.push(Row { key, values });
    }

    /// Name of the sample identifier column.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Value column names, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows, in order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Full header: the key column followed by the value columns.
    pub fn header(&self) -> Vec<String> {
        let mut header = Vec::with_capacity(1 + self.columns.len());
        header.push(self.key.clone());
        header.extend(self.columns.iter().cloned());
        header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_is_not_zero() {
        assert_ne!(Value::Missing, Value::Number(0.0));
        assert!(Value::Missing.is_missing());
        assert_eq!(Value::Missing.or_zero(), 0.0);
        assert_eq!(Value::Missing.as_f64(), None);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::Number(3.0).to_string(), "3");
        assert_eq!(Value::Missing.to_string(), "");
    }

    #[test]
    fn test_value_serializes_missing_as_null() {
        let json = serde_json::to_string(&vec![Value::Number(1.5), Value::Missing]).unwrap();
        assert_eq!(json, "[1.5,null]");
    }

    #[test]
    fn test_table_header() {
        let mut table = Table::new(DEFAULT_KEY, vec!["T0".to_string(), "T1".to_string()]);
        table.push_row("a".to_string(), vec![Value::Number(1.0), Value::Missing]);

        assert_eq!(table.header(), ["sample_id", "T0", "T1"]);
        assert_eq!(table.n_rows(), 1);
        assert_eq!(table.rows()[0].key, "a");
    }
}
