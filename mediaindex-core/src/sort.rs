/// Sort a list case-insensitively, keeping the relative order of entries
/// that differ only by case.
pub fn sort_case_insensitive(entries: &mut [String]) {
    entries.sort_by_cached_key(|s| s.to_lowercase());
}
