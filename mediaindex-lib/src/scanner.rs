//! Recursive file enumeration.
//!
//! Two orderings are supported: a plain depth-first walk, and a grouped
//! listing that emits one directory at a time with directories and the files
//! inside each sorted by name. Unreadable subdirectories are logged and
//! skipped; only a missing or non-directory root is fatal.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::error::IndexError;

/// Order in which discovered files are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanOrder {
    /// Folder by folder: directories sorted, files sorted within each directory.
    #[default]
    Grouped,
    /// Depth-first traversal order.
    Natural,
}

impl fmt::Display for ScanOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScanOrder::Grouped => "grouped",
            ScanOrder::Natural => "natural",
        })
    }
}

impl FromStr for ScanOrder {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grouped" => Ok(ScanOrder::Grouped),
            "natural" => Ok(ScanOrder::Natural),
            other => Err(IndexError::settings(format!(
                "Unknown scan order '{other}' (expected grouped or natural)"
            ))),
        }
    }
}

/// Files found under a root directory.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Canonical absolute root that was scanned.
    pub root: PathBuf,
    /// Absolute paths of every file found, in emission order.
    pub files: Vec<PathBuf>,
    /// Paths that could not be read and were skipped.
    pub skipped: Vec<PathBuf>,
}

impl ScanReport {
    /// Whether some part of the tree was skipped, making the listing partial.
    pub fn is_partial(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Check that `root` is an existing directory and return its canonical form.
pub fn resolve_root(root: &Path) -> Result<PathBuf, IndexError> {
    if !root.exists() {
        return Err(IndexError::NotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(IndexError::NotADirectory(root.to_path_buf()));
    }
    Ok(fs::canonicalize(root)?)
}

/// Recursively list every file under `root`.
///
/// `on_file` is called once per file as it is emitted. Symlinked directories
/// are not followed; symlinks to files are listed.
pub fn scan_files(
    root: &Path,
    order: ScanOrder,
    on_file: &dyn Fn(&Path),
) -> Result<ScanReport, IndexError> {
    let root = resolve_root(root)?;
    let mut report = ScanReport {
        root,
        ..ScanReport::default()
    };

    match order {
        ScanOrder::Natural => scan_natural(&mut report, on_file),
        ScanOrder::Grouped => scan_grouped(&mut report, on_file),
    }

    log::debug!(
        "Scanned {}: {} files, {} skipped",
        report.root.display(),
        report.files.len(),
        report.skipped.len()
    );
    Ok(report)
}

fn record_skip(report: &mut ScanReport, err: &walkdir::Error) {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| report.root.clone());
    log::warn!("Skipping '{}': {}", path.display(), err);
    if !report.skipped.contains(&path) {
        report.skipped.push(path);
    }
}

fn scan_natural(report: &mut ScanReport, on_file: &dyn Fn(&Path)) {
    let walker = WalkDir::new(&report.root)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        match entry {
            Ok(entry) => {
                if !entry.file_type().is_dir() && entry.path().is_file() {
                    on_file(entry.path());
                    report.files.push(entry.into_path());
                }
            }
            Err(e) => record_skip(report, &e),
        }
    }
}

fn scan_grouped(report: &mut ScanReport, on_file: &dyn Fn(&Path)) {
    // Pass 1: every directory holding at least one file
    let mut directories: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(&report.root).follow_links(false) {
        match entry {
            Ok(entry) => {
                if !entry.file_type().is_dir() && entry.path().is_file() {
                    if let Some(parent) = entry.path().parent() {
                        directories.push(parent.to_path_buf());
                    }
                }
            }
            Err(e) => record_skip(report, &e),
        }
    }

    // Directory paths sort as plain strings, so `a-b` lands before `a/c`
    directories.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    directories.dedup();

    // Pass 2: immediate files of each directory, sorted by name
    for directory in directories {
        let entries = match fs::read_dir(&directory) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Skipping '{}': {}", directory.display(), e);
                report.skipped.push(directory);
                continue;
            }
        };

        let mut files: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        for file in files {
            on_file(&file);
            report.files.push(file);
        }
    }
}
