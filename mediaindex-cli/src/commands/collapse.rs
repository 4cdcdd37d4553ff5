use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediaindex_lib::{CollapseJob, CollapseMode, ListFormat, Settings};

use crate::CliError;

/// Run the collapse command.
pub(crate) fn run_collapse(
    settings: &Settings,
    input: PathBuf,
    output: Option<PathBuf>,
    any_suffix: bool,
    format: Option<ListFormat>,
) -> Result<(), CliError> {
    let mode = if any_suffix {
        CollapseMode::AnySuffix
    } else {
        settings.collapse_mode()
    };

    let job = CollapseJob {
        input,
        output,
        format,
        mode,
    };

    log::info!(
        "Reading {}...",
        job.input.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::debug!("Collapse mode: {}", job.mode);

    let report = mediaindex_lib::run_collapse(&job)?;

    log::info!("Original entries: {}", report.input_count);
    log::info!("After collapsing: {}", report.entries.len());
    log::info!(
        "Collapsed {} ISO/SACD multi-track files",
        report.multi_track_bases
    );
    log::debug!("Dropped {} duplicate entries", report.collapsed);
    log::info!(
        "{} Done! {} unique filenames written to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        report.entries.len(),
        job.output_path()
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
