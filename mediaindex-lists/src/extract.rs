//! Streaming filename extraction from XML library exports.
//!
//! Exports look like:
//!
//! ```xml
//! <Items>
//!   <Item>
//!     <Field Name="Artist">Someone</Field>
//!     <Field Name="Filename">D:\Music\Someone\01.flac</Field>
//!   </Item>
//! </Items>
//! ```
//!
//! The document is read with a pull parser, so only the current record's
//! state is held in memory.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use mediaindex_core::sort_case_insensitive;

use crate::error::ListError;

/// How often (in records) a progress update is reported.
pub const EXTRACT_PROGRESS_INTERVAL: usize = 10_000;

/// Names of the elements and attributes that make up an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Element wrapping one library record.
    pub record_element: String,
    /// Child element of a record that holds one field value.
    pub field_element: String,
    /// Attribute on the field element naming the field.
    pub name_attribute: String,
    /// Field name whose text is extracted.
    pub field: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            record_element: "Item".to_string(),
            field_element: "Field".to_string(),
            name_attribute: "Name".to_string(),
            field: "Filename".to_string(),
        }
    }
}

/// Periodic progress during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractProgress {
    pub items_processed: usize,
    pub filenames_found: usize,
}

/// Result of an extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractReport {
    /// Extracted values, sorted case-insensitively.
    pub filenames: Vec<String>,
    /// Number of record elements seen.
    pub items_processed: usize,
}

/// Per-record parse state, dropped when the record closes.
struct RecordState {
    depth: usize,
    matched: bool,
    capture: Option<String>,
}

fn is_wanted_field(e: &BytesStart<'_>, options: &ExtractOptions) -> Result<bool, ListError> {
    if e.name().as_ref() != options.field_element.as_bytes() {
        return Ok(false);
    }
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == options.name_attribute.as_bytes() {
            return Ok(attr.unescape_value()? == options.field.as_str());
        }
    }
    Ok(false)
}

/// Extract the configured field from every record of an XML document.
///
/// Only the first matching field of each record is considered; a record
/// whose matching field is empty contributes nothing. Malformed XML aborts
/// the run.
pub fn extract_filenames<R: BufRead>(
    reader: R,
    options: &ExtractOptions,
    progress: &dyn Fn(ExtractProgress),
) -> Result<ExtractReport, ListError> {
    let mut xml = Reader::from_reader(reader);
    let mut buf = Vec::new();

    let mut filenames = Vec::new();
    let mut items_processed = 0usize;
    let mut depth = 0usize;
    let mut saw_element = false;
    let mut record: Option<RecordState> = None;

    let record_tag = options.record_element.as_bytes();

    let mut finish_record = |filenames: &[String]| {
        items_processed += 1;
        if items_processed % EXTRACT_PROGRESS_INTERVAL == 0 {
            progress(ExtractProgress {
                items_processed,
                filenames_found: filenames.len(),
            });
        }
    };

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                depth += 1;
                saw_element = true;
                match record.as_mut() {
                    None => {
                        if e.name().as_ref() == record_tag {
                            record = Some(RecordState {
                                depth,
                                matched: false,
                                capture: None,
                            });
                        }
                    }
                    Some(state) => {
                        if depth == state.depth + 1 && !state.matched && is_wanted_field(e, options)? {
                            state.matched = true;
                            state.capture = Some(String::new());
                        }
                    }
                }
            }
            Event::Empty(ref e) => {
                saw_element = true;
                match record.as_mut() {
                    // A self-closing record has no fields
                    None => {
                        if e.name().as_ref() == record_tag {
                            finish_record(&filenames);
                        }
                    }
                    Some(state) => {
                        if depth == state.depth && !state.matched && is_wanted_field(e, options)? {
                            state.matched = true;
                        }
                    }
                }
            }
            Event::Text(ref e) => {
                if let Some(text) = capture_at(&mut record, depth) {
                    text.push_str(&e.unescape()?);
                }
            }
            Event::CData(ref e) => {
                if let Some(text) = capture_at(&mut record, depth) {
                    text.push_str(&String::from_utf8_lossy(e));
                }
            }
            Event::End(_) => {
                let closes_record = match record.as_mut() {
                    Some(state) if depth == state.depth => true,
                    Some(state) if depth == state.depth + 1 => {
                        if let Some(text) = state.capture.take() {
                            if !text.is_empty() {
                                filenames.push(text);
                            }
                        }
                        false
                    }
                    _ => false,
                };
                if closes_record {
                    record = None;
                    finish_record(&filenames);
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if depth != 0 {
        return Err(ListError::invalid_input(
            "Unexpected end of XML document (unclosed elements)",
        ));
    }
    if !saw_element {
        return Err(ListError::invalid_input("No XML elements found"));
    }

    log::debug!(
        "Extracted {} filenames from {} records",
        filenames.len(),
        items_processed
    );
    sort_case_insensitive(&mut filenames);

    Ok(ExtractReport {
        filenames,
        items_processed,
    })
}

/// The text buffer of the field being captured, if `depth` is directly
/// inside it.
fn capture_at(record: &mut Option<RecordState>, depth: usize) -> Option<&mut String> {
    let state = record.as_mut()?;
    if depth == state.depth + 1 {
        state.capture.as_mut()
    } else {
        None
    }
}

/// Extract filenames from an XML file on disk.
pub fn extract_filenames_from_file(
    path: &Path,
    options: &ExtractOptions,
    progress: &dyn Fn(ExtractProgress),
) -> Result<ExtractReport, ListError> {
    let file = File::open(path)?;
    extract_filenames(BufReader::new(file), options, progress)
}

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod tests;
