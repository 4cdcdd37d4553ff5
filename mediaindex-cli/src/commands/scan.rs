use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

use mediaindex_lib::{ListFormat, ScanJob, ScanOrder, Settings, resolve_root};

use crate::CliError;

/// Run the scan command.
pub(crate) fn run_scan(
    settings: &Settings,
    directory: PathBuf,
    output: PathBuf,
    natural: bool,
    format: Option<ListFormat>,
) -> Result<(), CliError> {
    let root = resolve_root(&directory)?;
    let order = if natural {
        ScanOrder::Natural
    } else {
        settings.scan_order()
    };

    log::info!(
        "Searching in: {}",
        root.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!("Outputting to: {}", output.display());
    log::debug!("Scan order: {}", order);

    let job = ScanJob {
        root,
        output,
        format,
        order,
    };
    let report = mediaindex_lib::run_scan(&job, &|path| {
        log::info!("Found: {}", path.display());
    })?;

    if report.is_partial() {
        log::warn!(
            "{} {} director{} could not be read; the listing is incomplete",
            "\u{26A0}".if_supports_color(Stderr, |t| t.yellow()),
            report.skipped.len(),
            if report.skipped.len() == 1 { "y" } else { "ies" },
        );
    }
    log::info!(
        "{} Successfully saved {} file paths to '{}'.",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        report.files.len(),
        job.output.display(),
    );
    Ok(())
}
