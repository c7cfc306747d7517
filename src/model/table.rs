//! Table types.

use super::{Element, TextStyle};
use serde::{Deserialize, Serialize};

/// A table structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Rows in the table
    #[serde(default)]
    pub rows: Vec<TableRow>,

    /// Whether the first row is a header row
    #[serde(default)]
    pub has_header: bool,

    /// Text styling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

impl Table {
    /// Create a table whose first row is the header.
    pub fn with_header(rows: Vec<TableRow>) -> Self {
        Self {
            rows,
            has_header: true,
            style: None,
        }
    }

    /// Create a table without a header row.
    pub fn without_header(rows: Vec<TableRow>) -> Self {
        Self {
            rows,
            has_header: false,
            style: None,
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.cells.len()).unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    #[serde(default)]
    pub cells: Vec<TableCell>,

    /// Text styling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells, style: None }
    }

    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::text).collect())
    }
}

/// A table cell holding inline, text-bearing content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Inline content of the cell
    #[serde(default)]
    pub content: Vec<Element>,

    /// Text styling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

impl TableCell {
    /// Create a cell from inline elements.
    pub fn new(content: Vec<Element>) -> Self {
        Self {
            content,
            style: None,
        }
    }

    /// Create a new cell with text content.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![Element::paragraph(text)])
    }

    /// Create an empty cell.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the cell style and return self.
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = Some(style);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_new() {
        let table = Table::default();
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_table_with_data() {
        let mut table = Table::with_header(vec![TableRow::from_strings(["Name", "Age"])]);
        table.add_row(TableRow::from_strings(["Alice", "30"]));
        table.add_row(TableRow::from_strings(["Bob", "25"]));

        assert!(table.has_header);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_has_header_field_name() {
        let table: Table = serde_json::from_str(
            r#"{"hasHeader": true, "rows": [{"cells": [{"content": []}]}]}"#,
        )
        .unwrap();
        assert!(table.has_header);
        assert_eq!(table.rows[0].cells[0], TableCell::empty());
    }
}
