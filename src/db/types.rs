//! Database result types
//!
//! Display-ready result structures: every cell has already been converted
//! to its display string, with SQL NULL rendered as the literal `NULL`.

use std::time::Duration;

/// A fully materialized query result.
///
/// Invariant: every row has exactly `headers.len()` cells. A result
/// replaces whatever was previously displayed in its pane; there is no
/// incremental append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResults {
    /// Column names in engine order
    pub headers: Vec<String>,
    /// Rows in engine order, each cell stringified
    pub rows: Vec<Vec<String>>,
    /// Wall-clock execution time
    pub elapsed: Duration,
}

impl QueryResults {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>, elapsed: Duration) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == headers.len()));
        Self {
            headers,
            rows,
            elapsed,
        }
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// One column of a table, as described by the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    /// Column name
    pub name: String,
    /// Declared type, e.g. `character varying`
    pub data_type: String,
    /// Catalog nullability flag: `YES` or `NO`
    pub is_nullable: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_count() {
        let results = QueryResults::new(
            vec!["a".to_string(), "b".to_string()],
            vec![
                vec!["1".to_string(), "2".to_string()],
                vec!["3".to_string(), "NULL".to_string()],
            ],
            Duration::from_millis(5),
        );
        assert_eq!(results.row_count(), 2);
    }
}
