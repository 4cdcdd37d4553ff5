//! Serialization adapters for filename lists.
//!
//! The core transforms work on `Vec<String>`; this crate moves those lists in
//! and out of CSV tables, JSON arrays and plain text, and streams filenames
//! out of XML library exports.

pub mod error;
pub mod extract;
pub mod format;

pub use error::ListError;
pub use extract::{
    EXTRACT_PROGRESS_INTERVAL, ExtractOptions, ExtractProgress, ExtractReport, extract_filenames,
    extract_filenames_from_file,
};
pub use format::{
    FILENAME_HEADER, FILE_PATH_HEADER, ListFormat, read_lines, read_list, read_list_file, write_list,
    write_list_file,
};
