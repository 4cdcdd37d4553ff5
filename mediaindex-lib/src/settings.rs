//! Optional settings file (`~/.config/mediaindex/settings.toml`).
//!
//! Every value is optional; missing values fall back to the built-in
//! defaults of each tool. Command-line flags override both.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use mediaindex_core::{CollapseMode, CompareOptions, DEFAULT_EXCLUDED_EXTENSIONS};
use mediaindex_lists::ExtractOptions;

use crate::error::IndexError;
use crate::scanner::ScanOrder;

/// Differences with at most this many entries are printed inline.
pub const DEFAULT_DISPLAY_LIMIT: usize = 20;

/// Canonical path to the settings file: `~/.config/mediaindex/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("mediaindex").join("settings.toml")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub extract: ExtractSettings,
    pub collapse: CollapseSettings,
    pub scan: ScanSettings,
    pub compare: CompareSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractSettings {
    pub record_element: Option<String>,
    pub field_element: Option<String>,
    pub name_attribute: Option<String>,
    pub field: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollapseSettings {
    pub mode: Option<CollapseMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    pub order: Option<ScanOrder>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareSettings {
    pub excluded_extensions: Option<Vec<String>>,
    pub display_limit: Option<usize>,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, IndexError> {
        toml::from_str(contents).map_err(|e| IndexError::settings(e.to_string()))
    }

    /// Extraction element names, with defaults for anything unset.
    pub fn extract_options(&self) -> ExtractOptions {
        let defaults = ExtractOptions::default();
        let pick = |value: &Option<String>, default: String| value.clone().unwrap_or(default);
        ExtractOptions {
            record_element: pick(&self.extract.record_element, defaults.record_element),
            field_element: pick(&self.extract.field_element, defaults.field_element),
            name_attribute: pick(&self.extract.name_attribute, defaults.name_attribute),
            field: pick(&self.extract.field, defaults.field),
        }
    }

    pub fn collapse_mode(&self) -> CollapseMode {
        self.collapse.mode.unwrap_or_default()
    }

    pub fn scan_order(&self) -> ScanOrder {
        self.scan.order.unwrap_or_default()
    }

    pub fn compare_options(&self) -> CompareOptions {
        match &self.compare.excluded_extensions {
            Some(extensions) => CompareOptions::with_extensions(extensions),
            None => CompareOptions::with_extensions(DEFAULT_EXCLUDED_EXTENSIONS.iter().copied()),
        }
    }

    pub fn display_limit(&self) -> usize {
        self.compare.display_limit.unwrap_or(DEFAULT_DISPLAY_LIMIT)
    }

    /// Pretty-printed TOML for display.
    pub fn to_toml_string(&self) -> Result<String, IndexError> {
        toml::to_string_pretty(self).map_err(|e| IndexError::settings(e.to_string()))
    }
}

/// Load settings from `path`, or from [`settings_path`] when `None`.
///
/// A missing default file yields defaults. An explicitly requested file must
/// exist. A malformed file is always an error.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, IndexError> {
    let (path, explicit) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (settings_path(), false),
    };

    if !path.exists() {
        if explicit {
            return Err(IndexError::NotFound(path));
        }
        log::debug!("No settings file at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let contents = std::fs::read_to_string(&path)?;
    Settings::from_toml(&contents)
        .map_err(|e| IndexError::settings(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_settings_use_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings.extract_options(), ExtractOptions::default());
        assert_eq!(settings.collapse_mode(), CollapseMode::Strict);
        assert_eq!(settings.scan_order(), ScanOrder::Grouped);
        assert_eq!(settings.display_limit(), DEFAULT_DISPLAY_LIMIT);
        assert_eq!(settings.compare_options(), CompareOptions::default());
    }

    #[test]
    fn test_partial_settings_override() {
        let settings = Settings::from_toml(
            r#"
[extract]
field = "Path"

[collapse]
mode = "any-suffix"

[scan]
order = "natural"

[compare]
excluded_extensions = [".LOG", ".cue"]
display_limit = 5
"#,
        )
        .unwrap();

        let extract = settings.extract_options();
        assert_eq!(extract.field, "Path");
        assert_eq!(extract.record_element, "Item");
        assert_eq!(settings.collapse_mode(), CollapseMode::AnySuffix);
        assert_eq!(settings.scan_order(), ScanOrder::Natural);
        assert_eq!(
            settings.compare_options().excluded_extensions,
            vec![".log", ".cue"]
        );
        assert_eq!(settings.display_limit(), 5);
    }

    #[test]
    fn test_malformed_settings_fail() {
        assert!(Settings::from_toml("[compare]\ndisplay_limit = \"many\"").is_err());
        assert!(Settings::from_toml("[collapse]\nmode = \"sometimes\"").is_err());
    }

    #[test]
    fn test_settings_path_ends_with_file_name() {
        assert!(settings_path().ends_with("mediaindex/settings.toml"));
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let text = Settings::default().to_toml_string().unwrap();
        assert_eq!(Settings::from_toml(&text).unwrap(), Settings::default());
    }
}
