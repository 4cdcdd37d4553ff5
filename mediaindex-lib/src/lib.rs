//! Filesystem-facing layer of the media-library filename index.
//!
//! Hosts the directory scanner, the settings file, and one entry point per
//! tool (`ops`). The CLI resolves its arguments into the job structs defined
//! here and reports on the returned values.

pub mod error;
pub mod ops;
pub mod scanner;
pub mod settings;

pub use error::IndexError;
pub use ops::{
    CollapseJob, CompareJob, CompareOutcome, ExtractJob, FixQuotesJob, ScanJob,
    difference_output_path, run_collapse, run_compare, run_extract, run_fix_quotes, run_scan,
};
pub use scanner::{ScanOrder, ScanReport, resolve_root, scan_files};
pub use settings::{DEFAULT_DISPLAY_LIMIT, Settings, load_settings, settings_path};

// Re-export the lower layers so frontends only need this crate.
pub use mediaindex_core::{
    CollapseMode, CollapseReport, CompareOptions, CompareReport, displayable_entries,
};
pub use mediaindex_lists::{ExtractOptions, ExtractProgress, ExtractReport, ListFormat};
