//! Sheet model structures.
//!
//! The model is deliberately flat: a sheet is rows of display strings, in
//! document order. The first row is treated as a header row by the report
//! renderer; nothing in the model enforces that convention.

use serde::{Deserialize, Serialize};

/// A row of cell display strings, in column order as encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Cell display text, one entry per cell element
    pub cells: Vec<String>,
}

impl Row {
    /// Create a row from cell strings.
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// True if every cell in the row is an empty string.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }
}

/// An ordered sequence of rows extracted from one worksheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    /// All kept rows, in document order
    pub rows: Vec<Row>,
}

impl Sheet {
    /// Create an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the sheet.
    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// The header row, by convention the first row.
    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// The rows after the header.
    pub fn data_rows(&self) -> &[Row] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }

    /// Number of kept rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the sheet has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        Row::new(cells.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn test_header_and_data_split() {
        let mut sheet = Sheet::new();
        sheet.add_row(row(&["Name", "Age"]));
        sheet.add_row(row(&["Alice", "30"]));

        assert_eq!(sheet.header().unwrap().cells, vec!["Name", "Age"]);
        assert_eq!(sheet.data_rows().len(), 1);
        assert_eq!(sheet.data_rows()[0].cells, vec!["Alice", "30"]);
    }

    #[test]
    fn test_empty_sheet() {
        let sheet = Sheet::new();
        assert!(sheet.is_empty());
        assert!(sheet.header().is_none());
        assert!(sheet.data_rows().is_empty());
    }

    #[test]
    fn test_blank_row() {
        assert!(row(&["", ""]).is_blank());
        assert!(!row(&["", "x"]).is_blank());
        assert!(Row::default().is_blank());
    }
}
