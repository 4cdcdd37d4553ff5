//! Collapse ISO/SACD multi-track entries into one entry per disc image.

use std::collections::HashSet;

use crate::entry::{CollapseMode, base_name};
use crate::sort::sort_case_insensitive;

/// Result of collapsing a filename list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapseReport {
    /// Unique entries, sorted case-insensitively.
    pub entries: Vec<String>,
    /// Number of entries read from the input.
    pub input_count: usize,
    /// Number of input entries dropped as duplicates of an earlier base name.
    pub collapsed: usize,
    /// Number of distinct base names that came from a track-suffixed entry.
    pub multi_track_bases: usize,
}

/// Collapse track-suffixed entries to their base name.
///
/// The first occurrence of each base name wins; later entries that map to
/// the same base are dropped. The result is sorted case-insensitively.
pub fn collapse_tracks<I, S>(entries: I, mode: CollapseMode) -> CollapseReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut suffixed_bases: HashSet<String> = HashSet::new();
    let mut report = CollapseReport::default();

    for entry in entries {
        let name = entry.as_ref();
        report.input_count += 1;

        let base = base_name(name, mode);
        if base.len() != name.len() {
            suffixed_bases.insert(base.to_string());
        }

        if seen.contains(base) {
            log::debug!("Collapsed '{}' into '{}'", name, base);
            report.collapsed += 1;
            continue;
        }
        seen.insert(base.to_string());
        report.entries.push(base.to_string());
    }

    report.multi_track_bases = suffixed_bases.len();
    sort_case_insensitive(&mut report.entries);
    report
}

#[cfg(test)]
#[path = "tests/collapse_tests.rs"]
mod tests;
