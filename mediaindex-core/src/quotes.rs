//! Textual repair of CSV filename exports.
//!
//! Some exporters wrap every path in double quotes and escape each backslash.
//! This is a line-level patch, not a CSV decoder: interior delimiters and
//! lone backslashes pass through untouched.

/// Fix one line: strip one pair of wrapping quotes, then halve doubled backslashes.
///
/// Leading and trailing whitespace (including the line terminator) is trimmed.
pub fn fix_line(line: &str) -> String {
    let trimmed = line.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed);
    unquoted.replace("\\\\", "\\")
}

/// Fix every data line of a table, skipping the header row and blank lines.
pub fn fix_lines<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(fix_line)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_one_pair_of_quotes() {
        assert_eq!(fix_line("\"Album.flac\""), "Album.flac");
        assert_eq!(fix_line("\"\"quoted\"\""), "\"quoted\"");
    }

    #[test]
    fn test_unbalanced_quotes_kept() {
        assert_eq!(fix_line("\"Album.flac"), "\"Album.flac");
        assert_eq!(fix_line("Album.flac\""), "Album.flac\"");
        assert_eq!(fix_line("\""), "\"");
    }

    #[test]
    fn test_halves_doubled_backslashes() {
        assert_eq!(
            fix_line(r#""D:\\Music\\Album\\01.flac""#),
            r"D:\Music\Album\01.flac"
        );
        assert_eq!(fix_line(r"D:\Music"), r"D:\Music");
        assert_eq!(fix_line(r"a\\\b"), r"a\\b");
    }

    #[test]
    fn test_interior_delimiters_pass_through() {
        assert_eq!(fix_line("\"a,b\",c"), "\"a,b\",c");
    }

    #[test]
    fn test_fix_lines_skips_header_and_blanks() {
        let input = "Filename\n\"a.flac\"\n\n  \nb\\\\c.flac\r\n";
        assert_eq!(fix_lines(input.lines()), vec!["a.flac", "b\\c.flac"]);
    }
}
