//! # unsheet
//!
//! Extract cell text from the unzipped XML parts of a spreadsheet archive.
//!
//! This library works on the raw SpreadsheetML parts of an already-extracted
//! workbook: the shared-strings table and a worksheet. It resolves each
//! cell's literal value or shared-string reference into display text and
//! renders the result as a flat HEADERS/DATA report.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unsheet::{extract_parts, report};
//!
//! let sheet = extract_parts(
//!     "temp_excel/xl/sharedStrings.xml",
//!     "temp_excel/xl/worksheets/sheet1.xml",
//! )?;
//! println!("{}", report::render(&sheet));
//! # Ok::<(), unsheet::Error>(())
//! ```
//!
//! ## Piece-by-Piece
//!
//! ```no_run
//! use unsheet::{worksheet, SharedStrings};
//!
//! let strings = SharedStrings::load("xl/sharedStrings.xml")?;
//! let sheet = worksheet::load("xl/worksheets/sheet1.xml", &strings)?;
//! for row in &sheet.rows {
//!     println!("{}", row.cells.join(" | "));
//! }
//! # Ok::<(), unsheet::Error>(())
//! ```
//!
//! Parsing either part can fail with [`Error`]; a caller that wants the
//! degrade-to-empty behavior substitutes `SharedStrings::default()` or an
//! empty [`Sheet`] and carries on, which is what the `unsheet` CLI does.

pub mod error;
pub mod model;
pub mod report;
pub mod shared_strings;
pub mod text;
pub mod worksheet;

// Re-exports
pub use error::{Error, Result};
pub use model::{Row, Sheet};
pub use shared_strings::SharedStrings;

use std::path::Path;

/// Conventional location of the shared-strings part inside an unzipped
/// workbook directory.
pub const SHARED_STRINGS_PART: &str = "xl/sharedStrings.xml";

/// Conventional location of the first worksheet part.
pub const WORKSHEET_PART: &str = "xl/worksheets/sheet1.xml";

/// Extract a sheet from a shared-strings part and a worksheet part.
///
/// Convenience wrapper over [`SharedStrings::load`] and [`worksheet::load`].
/// A workbook without a shared-strings part is normal (all-numeric sheets);
/// a missing part is treated as an empty table rather than an error, so
/// every shared-string reference in the worksheet resolves to empty text.
pub fn extract_parts(
    shared_strings: impl AsRef<Path>,
    worksheet_part: impl AsRef<Path>,
) -> Result<Sheet> {
    let strings = match SharedStrings::load(shared_strings) {
        Ok(s) => s,
        Err(Error::Io(_)) => SharedStrings::default(),
        Err(e) => return Err(e),
    };
    worksheet::load(worksheet_part, &strings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_constants() {
        assert_eq!(SHARED_STRINGS_PART, "xl/sharedStrings.xml");
        assert_eq!(WORKSHEET_PART, "xl/worksheets/sheet1.xml");
    }

    #[test]
    fn test_extract_parts_missing_worksheet() {
        let err = extract_parts("no/sharedStrings.xml", "no/sheet1.xml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
