//! Shared strings table parsing.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::text;

/// Shared strings table.
///
/// Holds every string item from the shared-strings part, in document order,
/// normalized. Built once per run and never mutated; worksheet cells resolve
/// into it by position, so empty items are kept as empty strings to preserve
/// the source numbering.
#[derive(Debug, Clone, Default)]
pub struct SharedStrings {
    /// All strings in order
    strings: Vec<String>,
}

impl SharedStrings {
    /// Read and parse a shared-strings part from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let xml = fs::read_to_string(path)?;
        Self::parse(&xml)
    }

    /// Parse shared strings from XML content.
    ///
    /// Each `<si>` item may hold several `<t>` fragments (rich-text runs,
    /// phonetic runs); their texts are concatenated in document order into
    /// one logical string, then normalized before storage. An item with no
    /// fragments still produces an entry.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut strings = Vec::new();
        let mut reader = quick_xml::Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut in_si = false;
        let mut in_t = false;
        let mut current_text = String::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(quick_xml::events::Event::Start(e)) => match e.name().as_ref() {
                    b"si" => {
                        in_si = true;
                        current_text.clear();
                    }
                    b"t" if in_si => {
                        in_t = true;
                    }
                    _ => {}
                },
                // <si/> is an empty item; it still occupies its index.
                Ok(quick_xml::events::Event::Empty(e)) => {
                    if e.name().as_ref() == b"si" {
                        strings.push(String::new());
                    }
                }
                Ok(quick_xml::events::Event::Text(e)) => {
                    if in_t {
                        let fragment = e.unescape().unwrap_or_default();
                        current_text.push_str(&fragment);
                    }
                }
                Ok(quick_xml::events::Event::End(e)) => match e.name().as_ref() {
                    b"si" => {
                        strings.push(text::normalize(&current_text));
                        in_si = false;
                    }
                    b"t" => {
                        in_t = false;
                    }
                    _ => {}
                },
                Ok(quick_xml::events::Event::Eof) => break,
                Err(e) => return Err(Error::XmlParse(e.to_string())),
                _ => {}
            }
            buf.clear();
        }

        Ok(Self { strings })
    }

    /// Get a string by index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.strings.get(index).map(|s| s.as_str())
    }

    /// Get the count of shared strings.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
