//! Symmetric difference of two filename lists.
//!
//! Both lists are filtered by extension, then compared through a normalized
//! key (lexical path normalization plus lowercasing). Reported entries keep
//! the casing of the first input entry that produced each key.

use std::collections::HashMap;

use crate::sort::sort_case_insensitive;

/// Sidecar file types that never correspond to audio content.
pub const DEFAULT_EXCLUDED_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".log", ".txt", ".png", ".cue", ".m3u", ".tif", ".bmp", ".md5", ".sfv",
    ".ffp", ".pdf", ".m3u8", ".accurip", ".inf", ".exe", ".qdat", ".diz", ".mov", ".dir", ".ons",
];

/// Options controlling which entries take part in a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOptions {
    /// Lowercased suffixes; an entry ending with any of them is dropped.
    pub excluded_extensions: Vec<String>,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self::with_extensions(DEFAULT_EXCLUDED_EXTENSIONS.iter().copied())
    }
}

impl CompareOptions {
    /// Build options from any list of extensions. Case is folded here so
    /// callers can pass settings values through unchanged.
    pub fn with_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            excluded_extensions: extensions
                .into_iter()
                .map(|e| e.as_ref().to_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
        }
    }

    /// Whether `name` ends with one of the excluded extensions, ignoring case.
    pub fn is_excluded(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.excluded_extensions
            .iter()
            .any(|ext| lower.ends_with(ext.as_str()))
    }
}

/// Counts and differences produced by [`compare_lists`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareReport {
    /// Entries kept from the left list after filtering.
    pub left_count: usize,
    /// Entries kept from the right list after filtering.
    pub right_count: usize,
    /// Entries removed from the left list by the extension filter.
    pub left_filtered: usize,
    /// Entries removed from the right list by the extension filter.
    pub right_filtered: usize,
    /// Number of normalized keys present on both sides.
    pub common: usize,
    /// Entries only in the left list, sorted case-insensitively.
    pub only_in_left: Vec<String>,
    /// Entries only in the right list, sorted case-insensitively.
    pub only_in_right: Vec<String>,
}

impl CompareReport {
    pub fn is_identical(&self) -> bool {
        self.only_in_left.is_empty() && self.only_in_right.is_empty()
    }
}

/// Lexically normalize a path for comparison and lowercase it.
///
/// Both `/` and `\` count as separators. Empty and `.` segments are dropped
/// and `name/..` pairs cancel out. The result always uses `/`.
pub fn normalize_path(path: &str) -> String {
    let unified = path.replace('\\', "/");
    let rooted = unified.starts_with('/');

    let mut parts: Vec<&str> = Vec::new();
    for segment in unified.split('/') {
        match segment {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                // `..` above the root stays at the root
                _ if rooted => {}
                _ => parts.push(".."),
            },
            _ => parts.push(segment),
        }
    }

    let joined = parts.join("/");
    let normalized = match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    };
    normalized.to_lowercase()
}

/// Index retained entries by normalized key, keeping the first original
/// spelling for each key.
fn index_entries<'a>(
    entries: &'a [String],
    options: &CompareOptions,
) -> (HashMap<String, &'a str>, usize, usize) {
    let mut keys: HashMap<String, &'a str> = HashMap::new();
    let mut kept = 0;
    let mut filtered = 0;

    for entry in entries {
        if options.is_excluded(entry) {
            filtered += 1;
            continue;
        }
        kept += 1;
        keys.entry(normalize_path(entry)).or_insert(entry.as_str());
    }

    (keys, kept, filtered)
}

fn only_in(
    side: &HashMap<String, &str>,
    other: &HashMap<String, &str>,
) -> Vec<String> {
    let mut result: Vec<String> = side
        .iter()
        .filter(|(key, _)| !other.contains_key(*key))
        .map(|(_, original)| original.to_string())
        .collect();
    sort_case_insensitive(&mut result);
    result
}

/// Compare two filename lists.
pub fn compare_lists(left: &[String], right: &[String], options: &CompareOptions) -> CompareReport {
    let (left_keys, left_count, left_filtered) = index_entries(left, options);
    let (right_keys, right_count, right_filtered) = index_entries(right, options);

    let common = left_keys
        .keys()
        .filter(|key| right_keys.contains_key(*key))
        .count();

    CompareReport {
        left_count,
        right_count,
        left_filtered,
        right_filtered,
        common,
        only_in_left: only_in(&left_keys, &right_keys),
        only_in_right: only_in(&right_keys, &left_keys),
    }
}

/// The entries to list inline, or `None` when there are more than `limit`.
pub fn displayable_entries(entries: &[String], limit: usize) -> Option<&[String]> {
    (entries.len() <= limit).then_some(entries)
}

#[cfg(test)]
#[path = "tests/compare_tests.rs"]
mod tests;
