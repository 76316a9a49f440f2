//! Table output types.

use serde::{Deserialize, Serialize};

/// A reconstructed table: ordered rows of plain text cells.
///
/// After alignment every row has the same cell count. A table is only
/// emitted with at least two rows; single structurally-isolated rows are
/// never promoted to tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Rows of cell text, top to bottom
    pub rows: Vec<Vec<String>>,

    /// Set when the aligner could not resolve a missing column and
    /// passed a row through unmodified; such tables should be treated
    /// as low-confidence by downstream consumers
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub low_confidence: bool,
}

impl Table {
    /// Create a table from aligned rows.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows,
            low_confidence: false,
        }
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.len()).unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a tab-separated plain text representation.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_counts() {
        let table = Table::new(vec![
            vec!["Name".to_string(), "Age".to_string()],
            vec!["Alice".to_string(), "30".to_string()],
        ]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert!(!table.is_empty());
        assert_eq!(table.plain_text(), "Name\tAge\nAlice\t30");
    }

    #[test]
    fn test_confidence_flag_serialization() {
        let table = Table::new(vec![vec!["a".to_string()]]);
        let json = serde_json::to_string(&table).unwrap();
        assert!(!json.contains("low_confidence"));

        let mut flagged = table;
        flagged.low_confidence = true;
        let json = serde_json::to_string(&flagged).unwrap();
        assert!(json.contains("low_confidence"));
    }
}
