//! Entry points for each index tool.
//!
//! Every function takes fully resolved options (paths, format, mode) and
//! performs one read, transform, write pass. Output files are only created
//! once the input has been read and transformed successfully.

use std::path::{Path, PathBuf};

use mediaindex_core::{
    CollapseMode, CollapseReport, CompareOptions, CompareReport, collapse_tracks, compare_lists,
    fix_lines,
};
use mediaindex_lists::{
    ExtractOptions, ExtractProgress, ExtractReport, FILE_PATH_HEADER, FILENAME_HEADER, ListFormat,
    extract_filenames_from_file, read_lines, read_list_file, write_list_file,
};

use crate::error::IndexError;
use crate::scanner::{ScanOrder, ScanReport, scan_files};

fn require_file(path: &Path) -> Result<(), IndexError> {
    if path.exists() {
        Ok(())
    } else {
        Err(IndexError::NotFound(path.to_path_buf()))
    }
}

fn read_entries(path: &Path, format: ListFormat) -> Result<Vec<String>, IndexError> {
    require_file(path)?;
    read_list_file(path, format).map_err(|e| IndexError::read(path, e))
}

fn write_entries(
    path: &Path,
    format: ListFormat,
    header: &str,
    entries: &[String],
) -> Result<(), IndexError> {
    write_list_file(path, format, header, entries).map_err(|e| IndexError::write(path, e))
}

// ---------------------------------------------------------------------------
// Extract
// ---------------------------------------------------------------------------

/// Resolved options for the filename extractor.
#[derive(Debug, Clone)]
pub struct ExtractJob {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Output format; `None` picks one from the output extension.
    pub format: Option<ListFormat>,
    pub options: ExtractOptions,
}

/// Extract filenames from an XML export and write them sorted.
pub fn run_extract(
    job: &ExtractJob,
    progress: &dyn Fn(ExtractProgress),
) -> Result<ExtractReport, IndexError> {
    require_file(&job.input)?;
    let report = extract_filenames_from_file(&job.input, &job.options, progress)
        .map_err(|e| IndexError::read(&job.input, e))?;

    let format = job
        .format
        .unwrap_or_else(|| ListFormat::from_path(&job.output));
    write_entries(&job.output, format, FILENAME_HEADER, &report.filenames)?;
    Ok(report)
}

// ---------------------------------------------------------------------------
// Collapse
// ---------------------------------------------------------------------------

/// Resolved options for the track collapser.
#[derive(Debug, Clone)]
pub struct CollapseJob {
    pub input: PathBuf,
    /// Destination; `None` rewrites the input in place.
    pub output: Option<PathBuf>,
    /// Format of both input and output; `None` picks one from the input extension.
    pub format: Option<ListFormat>,
    pub mode: CollapseMode,
}

impl CollapseJob {
    pub fn output_path(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.input)
    }
}

/// Collapse multi-track entries and write the list back in its own format.
pub fn run_collapse(job: &CollapseJob) -> Result<CollapseReport, IndexError> {
    let format = job
        .format
        .unwrap_or_else(|| ListFormat::from_path(&job.input));
    let entries = read_entries(&job.input, format)?;

    let report = collapse_tracks(&entries, job.mode);
    write_entries(job.output_path(), format, FILENAME_HEADER, &report.entries)?;
    Ok(report)
}

// ---------------------------------------------------------------------------
// Scan
// ---------------------------------------------------------------------------

/// Resolved options for the directory scanner.
#[derive(Debug, Clone)]
pub struct ScanJob {
    pub root: PathBuf,
    pub output: PathBuf,
    /// Output format; `None` picks one from the output extension.
    pub format: Option<ListFormat>,
    pub order: ScanOrder,
}

/// Render a scanned path for a list file, warning when it is not valid UTF-8.
fn path_entry(path: &Path) -> String {
    match path.to_str() {
        Some(text) => text.to_string(),
        None => {
            let lossy = path.to_string_lossy().into_owned();
            log::warn!("Path is not valid UTF-8, writing it as '{}'", lossy);
            lossy
        }
    }
}

/// Scan a directory tree and write the absolute path of every file.
///
/// A missing or non-directory root fails before any output is created.
pub fn run_scan(job: &ScanJob, on_file: &dyn Fn(&Path)) -> Result<ScanReport, IndexError> {
    let report = scan_files(&job.root, job.order, on_file)?;

    let paths: Vec<String> = report.files.iter().map(|p| path_entry(p)).collect();
    let format = job
        .format
        .unwrap_or_else(|| ListFormat::from_path(&job.output));
    write_entries(&job.output, format, FILE_PATH_HEADER, &paths)?;
    Ok(report)
}

// ---------------------------------------------------------------------------
// Compare
// ---------------------------------------------------------------------------

/// Resolved options for the list differ.
#[derive(Debug, Clone)]
pub struct CompareJob {
    pub left: PathBuf,
    pub right: PathBuf,
    /// Directory receiving the `only_in_*.txt` files.
    pub out_dir: PathBuf,
    pub options: CompareOptions,
}

/// Comparison report plus the difference files that were written.
#[derive(Debug, Clone)]
pub struct CompareOutcome {
    pub report: CompareReport,
    pub left_output: Option<PathBuf>,
    pub right_output: Option<PathBuf>,
}

/// `only_in_<stem>.txt` inside `out_dir`.
pub fn difference_output_path(out_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "input".to_string());
    out_dir.join(format!("only_in_{stem}.txt"))
}

/// Compare two lists and save each non-empty difference to its own file.
pub fn run_compare(job: &CompareJob) -> Result<CompareOutcome, IndexError> {
    let left = read_entries(&job.left, ListFormat::from_path(&job.left))?;
    let right = read_entries(&job.right, ListFormat::from_path(&job.right))?;

    let report = compare_lists(&left, &right, &job.options);

    let left_path = difference_output_path(&job.out_dir, &job.left);
    let mut right_path = difference_output_path(&job.out_dir, &job.right);
    if right_path == left_path {
        right_path = right_path.with_file_name(format!(
            "{}_2.txt",
            right_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        ));
    }

    let left_output = save_difference(&left_path, &report.only_in_left)?;
    let right_output = save_difference(&right_path, &report.only_in_right)?;

    Ok(CompareOutcome {
        report,
        left_output,
        right_output,
    })
}

fn save_difference(path: &Path, entries: &[String]) -> Result<Option<PathBuf>, IndexError> {
    if entries.is_empty() {
        return Ok(None);
    }
    write_entries(path, ListFormat::Text, FILENAME_HEADER, entries)?;
    Ok(Some(path.to_path_buf()))
}

// ---------------------------------------------------------------------------
// Fix quotes
// ---------------------------------------------------------------------------

/// Resolved options for the quote/backslash fixer.
#[derive(Debug, Clone)]
pub struct FixQuotesJob {
    pub input: PathBuf,
    /// Destination; `None` rewrites the input in place.
    pub output: Option<PathBuf>,
}

impl FixQuotesJob {
    pub fn output_path(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.input)
    }
}

/// Strip wrapping quotes and doubled backslashes from a filename table.
///
/// Returns the fixed entries (without the header).
pub fn run_fix_quotes(job: &FixQuotesJob) -> Result<Vec<String>, IndexError> {
    require_file(&job.input)?;
    let lines = read_lines(&job.input).map_err(|e| IndexError::read(&job.input, e))?;
    let fixed = fix_lines(lines.iter().map(String::as_str));

    let mut output = Vec::with_capacity(fixed.len() + 1);
    output.push(FILENAME_HEADER.to_string());
    output.extend(fixed.iter().cloned());
    write_entries(job.output_path(), ListFormat::Text, FILENAME_HEADER, &output)?;
    Ok(fixed)
}
