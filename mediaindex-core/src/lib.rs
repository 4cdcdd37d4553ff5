//! Core list transforms for the media-library filename index.
//!
//! Everything here operates on ordered lists of strings and performs no I/O.
//! Serialization lives in `mediaindex-lists`; filesystem access lives in
//! `mediaindex-lib`.

pub mod collapse;
pub mod compare;
pub mod entry;
pub mod quotes;
pub mod sort;

pub use collapse::{CollapseReport, collapse_tracks};
pub use compare::{
    CompareOptions, CompareReport, DEFAULT_EXCLUDED_EXTENSIONS, compare_lists,
    displayable_entries,
};
pub use entry::{CollapseMode, ParseModeError, base_name, split_track_suffix};
pub use quotes::{fix_line, fix_lines};
pub use sort::sort_case_insensitive;
