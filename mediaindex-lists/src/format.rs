//! CSV, JSON and plain-text encodings of a filename list.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::ListError;

/// Header used by filename tables (library exports, collapsed lists).
pub const FILENAME_HEADER: &str = "Filename";

/// Header used by directory scan tables.
pub const FILE_PATH_HEADER: &str = "File Path";

/// On-disk encoding of a filename list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListFormat {
    /// Single-column table with one header row.
    Csv,
    /// JSON array of strings.
    Json,
    /// One entry per line, no header.
    Text,
}

impl ListFormat {
    /// Pick a format from a file extension: `.csv`, `.json`, anything else is text.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("csv") => ListFormat::Csv,
            Some("json") => ListFormat::Json,
            _ => ListFormat::Text,
        }
    }
}

impl fmt::Display for ListFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ListFormat::Csv => "csv",
            ListFormat::Json => "json",
            ListFormat::Text => "text",
        })
    }
}

impl FromStr for ListFormat {
    type Err = ListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ListFormat::Csv),
            "json" => Ok(ListFormat::Json),
            "text" | "txt" => Ok(ListFormat::Text),
            other => Err(ListError::invalid_input(format!(
                "Unknown list format '{other}' (expected csv, json or text)"
            ))),
        }
    }
}

/// Read a filename list in the given format.
///
/// CSV input skips the header row and takes the first column of every
/// non-empty row. Text input skips blank lines.
pub fn read_list<R: Read>(reader: R, format: ListFormat) -> Result<Vec<String>, ListError> {
    match format {
        ListFormat::Csv => {
            let mut csv_reader = csv::ReaderBuilder::new()
                .has_headers(true)
                .flexible(true)
                .from_reader(reader);
            let mut entries = Vec::new();
            for record in csv_reader.records() {
                let record = record?;
                if let Some(first) = record.get(0) {
                    entries.push(first.to_string());
                }
            }
            Ok(entries)
        }
        ListFormat::Json => Ok(serde_json::from_reader(reader)?),
        ListFormat::Text => {
            let mut entries = Vec::new();
            for line in BufReader::new(reader).lines() {
                let line = line?;
                let line = line.trim_end_matches('\r');
                if !line.trim().is_empty() {
                    entries.push(line.to_string());
                }
            }
            Ok(entries)
        }
    }
}

/// Read a filename list from a file.
pub fn read_list_file(path: &Path, format: ListFormat) -> Result<Vec<String>, ListError> {
    let file = File::open(path)?;
    read_list(BufReader::new(file), format)
}

/// Write a filename list in the given format.
///
/// `header` is only used by CSV output.
pub fn write_list<W: Write>(
    mut writer: W,
    format: ListFormat,
    header: &str,
    entries: &[String],
) -> Result<(), ListError> {
    match format {
        ListFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            csv_writer.write_record([header])?;
            for entry in entries {
                csv_writer.write_record([entry])?;
            }
            csv_writer.flush()?;
        }
        ListFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, entries)?;
            writeln!(writer)?;
            writer.flush()?;
        }
        ListFormat::Text => {
            for entry in entries {
                writeln!(writer, "{entry}")?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

/// Write a filename list to a file, replacing any existing content.
pub fn write_list_file(
    path: &Path,
    format: ListFormat,
    header: &str,
    entries: &[String],
) -> Result<(), ListError> {
    let file = File::create(path)?;
    write_list(BufWriter::new(file), format, header, entries)
}

/// Read every line of a file, for callers that patch text without parsing it.
pub fn read_lines(path: &Path) -> Result<Vec<String>, ListError> {
    let file = File::open(path)?;
    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(ListError::from)
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
