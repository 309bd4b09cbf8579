//! Result types for query execution

use serde::Serialize;

use crate::value::Value;

/// Result of a successful query.
///
/// `headers` and every row are positionally aligned and have equal length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionResult {
    /// Column headers after wildcard expansion
    pub headers: Vec<String>,
    /// Output rows in result order
    pub rows: Vec<Vec<Value>>,
    /// Rows produced by the table provider
    pub scanned_count: usize,
    /// Rows that satisfied the predicate
    pub matched_count: usize,
    /// Rows returned after pagination
    pub returned_count: usize,
}

impl ExecutionResult {
    /// Returns true if no rows were returned
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns an iterator over the rows
    pub fn iter(&self) -> impl Iterator<Item = &[Value]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Value at `row` under `header`, using the first matching header
    pub fn get(&self, row: usize, header: &str) -> Option<&Value> {
        let col = self.headers.iter().position(|h| h == header)?;
        self.rows.get(row)?.get(col)
    }

    /// Splits into `(headers, rows)`
    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<Value>>) {
        (self.headers, self.rows)
    }

    /// Serializes to a single JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
