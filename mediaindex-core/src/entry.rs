//! Filename entries and ISO/SACD track suffixes.
//!
//! Disc images exported from some players list every logical track as its
//! own row: `Album.iso;1`, `Album.iso;2`, ... All of them refer to the same
//! file on disk, `Album.iso`, which is the *base name*.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How aggressively `;`-suffixed names are folded into their base name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollapseMode {
    /// Only a trailing `;<digits>` marks a track suffix.
    #[default]
    Strict,
    /// Anything after the last `;` is treated as a track suffix.
    AnySuffix,
}

impl CollapseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollapseMode::Strict => "strict",
            CollapseMode::AnySuffix => "any-suffix",
        }
    }
}

impl fmt::Display for CollapseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a collapse mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown collapse mode '{0}' (expected 'strict' or 'any-suffix')")]
pub struct ParseModeError(pub String);

impl FromStr for CollapseMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(CollapseMode::Strict),
            "any-suffix" => Ok(CollapseMode::AnySuffix),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Split a name on its last `;` into `(base, suffix)`.
///
/// Returns `None` when the name contains no `;` at all. The suffix is
/// returned as-is and may be empty or non-numeric.
pub fn split_track_suffix(name: &str) -> Option<(&str, &str)> {
    name.rsplit_once(';')
}

/// Whether a suffix is a track number: non-empty and ASCII digits only.
fn is_track_number(suffix: &str) -> bool {
    !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit())
}

/// The base filename of an entry under the given collapse mode.
///
/// Strict mode strips every trailing `;<digits>` suffix, so `A;1;2` maps to
/// `A`. Entries without a qualifying suffix are their own base name.
pub fn base_name(name: &str, mode: CollapseMode) -> &str {
    match mode {
        CollapseMode::Strict => {
            let mut base = name;
            while let Some((head, suffix)) = split_track_suffix(base) {
                if !is_track_number(suffix) {
                    break;
                }
                base = head;
            }
            base
        }
        CollapseMode::AnySuffix => split_track_suffix(name).map_or(name, |(base, _)| base),
    }
}

#[cfg(test)]
#[path = "tests/entry_tests.rs"]
mod tests;
