//! Worksheet parsing: rows and cells into display text.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{Row, Sheet};
use crate::shared_strings::SharedStrings;

/// Read and parse a worksheet part from disk.
pub fn load(path: impl AsRef<Path>, strings: &SharedStrings) -> Result<Sheet> {
    let xml = fs::read_to_string(path)?;
    parse(&xml, strings)
}

/// Parse a worksheet XML part into a [`Sheet`].
///
/// Rows and cells are walked in document order. A cell with no `<v>` child
/// contributes an empty string; a cell with one is resolved through
/// [`resolve_cell`]. Rows that contain no cell elements at all are dropped;
/// a row whose cells are all empty is kept.
///
/// Text events are not trimmed here: literal values pass through exactly as
/// written, padding included. Only the shared-string path normalizes.
pub fn parse(xml: &str, strings: &SharedStrings) -> Result<Sheet> {
    let mut sheet = Sheet::new();
    let mut reader = quick_xml::Reader::from_str(xml);

    let mut buf = Vec::new();
    let mut in_cell = false;
    let mut in_value = false;
    let mut current_row: Option<Vec<String>> = None;
    let mut cell_type: Option<String> = None;
    let mut cell_value = String::new();
    let mut cell_has_value = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(quick_xml::events::Event::Start(ref e)) => match e.name().as_ref() {
                b"row" => {
                    current_row = Some(Vec::new());
                }
                b"c" if current_row.is_some() => {
                    in_cell = true;
                    cell_type = None;
                    cell_value.clear();
                    cell_has_value = false;

                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"t" {
                            cell_type = Some(String::from_utf8_lossy(&attr.value).to_string());
                        }
                    }
                }
                // Only <v> carries the cell value; <f> and <is> do not.
                b"v" if in_cell => {
                    in_value = true;
                    cell_has_value = true;
                }
                _ => {}
            },
            Ok(quick_xml::events::Event::Empty(ref e)) => match e.name().as_ref() {
                // <row/> opens and closes an empty row, which gets dropped.
                b"row" => {}
                // <c/> is a present cell with no value.
                b"c" => {
                    if let Some(ref mut row) = current_row {
                        row.push(String::new());
                    }
                }
                _ => {}
            },
            Ok(quick_xml::events::Event::Text(ref e)) => {
                if in_value {
                    let fragment = e.unescape().unwrap_or_default();
                    cell_value.push_str(&fragment);
                }
            }
            Ok(quick_xml::events::Event::End(ref e)) => match e.name().as_ref() {
                b"row" => {
                    if let Some(cells) = current_row.take() {
                        if !cells.is_empty() {
                            sheet.add_row(Row::new(cells));
                        }
                    }
                }
                b"c" => {
                    let display = if cell_has_value {
                        resolve_cell(&cell_value, cell_type.as_deref(), strings)
                    } else {
                        String::new()
                    };

                    if let Some(ref mut row) = current_row {
                        row.push(display);
                    }
                    in_cell = false;
                }
                b"v" => {
                    in_value = false;
                }
                _ => {}
            },
            Ok(quick_xml::events::Event::Eof) => break,
            Err(e) => return Err(Error::XmlParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(sheet)
}

/// Resolve a cell's raw value into display text.
///
/// A cell is a shared-string reference only when its type attribute is `s`
/// and the raw value is a non-empty digit string; the index is then
/// bounds-checked against the table, resolving to empty text when out of
/// range. Every other combination passes the raw text through verbatim,
/// with no numeric formatting or type coercion.
fn resolve_cell(raw: &str, cell_type: Option<&str>, strings: &SharedStrings) -> String {
    if cell_type == Some("s") && !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        // An index too large for usize is out of range for any table.
        match raw.parse::<usize>() {
            Ok(idx) => strings.get(idx).unwrap_or("").to_string(),
            Err(_) => String::new(),
        }
    } else {
        raw.to_string()
    }
}
