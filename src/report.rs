//! Flat text report rendering.
//!
//! The report has two sections: HEADERS, one line per header-row column with
//! its 1-based column number, and DATA, one block per subsequent row listing
//! its non-empty cells. Rendering is deterministic, so re-running the
//! pipeline on unchanged parts reproduces the report byte-for-byte.

use crate::model::Sheet;

/// Title line at the top of the report.
pub const REPORT_TITLE: &str = "EXTRACTED SHEET CONTENT";

/// Render a sheet to report text.
pub fn render(sheet: &Sheet) -> String {
    let mut out = String::new();

    out.push_str(REPORT_TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(80));
    out.push_str("\n\n");

    out.push_str("HEADERS:\n");
    out.push_str(&"-".repeat(40));
    out.push('\n');

    if let Some(header) = sheet.header() {
        for (i, cell) in header.cells.iter().enumerate() {
            out.push_str(&format!("Column {}: {}\n", i + 1, cell));
        }
    }

    out.push_str("\nDATA:\n");
    out.push_str(&"-".repeat(40));
    out.push('\n');

    for (i, row) in sheet.data_rows().iter().enumerate() {
        out.push_str(&format!("\nRow {}:\n", i + 1));
        for cell in &row.cells {
            if !cell.trim().is_empty() {
                out.push_str(&format!("  {}\n", cell));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Row;

    fn row(cells: &[&str]) -> Row {
        Row::new(cells.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn test_headers_and_data() {
        let mut sheet = Sheet::new();
        sheet.add_row(row(&["Name", "Age"]));
        sheet.add_row(row(&["Alice", "30"]));

        let report = render(&sheet);
        assert!(report.contains("Column 1: Name\n"));
        assert!(report.contains("Column 2: Age\n"));
        assert!(report.contains("Row 1:\n  Alice\n  30\n"));
    }

    #[test]
    fn test_empty_cells_omitted_from_data() {
        let mut sheet = Sheet::new();
        sheet.add_row(row(&["H"]));
        sheet.add_row(row(&["", "kept", ""]));

        let report = render(&sheet);
        assert!(report.contains("Row 1:\n  kept\n"));
        assert!(!report.contains("\n  \n"));
    }

    #[test]
    fn test_empty_sheet_still_has_sections() {
        let report = render(&Sheet::new());
        assert!(report.starts_with(REPORT_TITLE));
        assert!(report.contains("HEADERS:\n"));
        assert!(report.contains("DATA:\n"));
        assert!(!report.contains("Column 1"));
        assert!(!report.contains("Row 1"));
    }

    #[test]
    fn test_deterministic() {
        let mut sheet = Sheet::new();
        sheet.add_row(row(&["a", "b"]));
        sheet.add_row(row(&["1", "2"]));
        assert_eq!(render(&sheet), render(&sheet));
    }
}
