use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediaindex_lib::{CompareJob, CompareOptions, Settings, displayable_entries};

use crate::CliError;

const RULE_WIDTH: usize = 80;

fn log_rule() {
    log::info!("{}", "=".repeat(RULE_WIDTH));
}

/// Run the compare command.
pub(crate) fn run_compare(
    settings: &Settings,
    left: PathBuf,
    right: PathBuf,
    out_dir: Option<PathBuf>,
    exclude: Option<Vec<String>>,
    limit: Option<usize>,
) -> Result<(), CliError> {
    let options = match exclude {
        Some(extensions) => CompareOptions::with_extensions(extensions),
        None => settings.compare_options(),
    };
    let limit = limit.unwrap_or_else(|| settings.display_limit());
    let out_dir = out_dir.unwrap_or_else(|| PathBuf::from("."));

    log::info!("Loading {}...", left.display());
    log::info!("Loading {}...", right.display());
    log::info!(
        "Filtering out {} file types: {}...",
        options.excluded_extensions.len(),
        options.excluded_extensions.join(", "),
    );

    let job = CompareJob {
        left,
        right,
        out_dir,
        options,
    };
    let outcome = mediaindex_lib::run_compare(&job)?;
    let report = &outcome.report;

    log::info!(
        "Filtered out {} files from {}",
        report.left_filtered,
        job.left.display()
    );
    log::info!(
        "Filtered out {} files from {}",
        report.right_filtered,
        job.right.display()
    );

    crate::log_blank();
    log_rule();
    log::info!("{}", "COMPARISON RESULTS".if_supports_color(Stdout, |t| t.bold()));
    log_rule();
    crate::log_blank();
    log::info!(
        "Total entries in {} (after filtering): {}",
        job.left.display(),
        report.left_count
    );
    log::info!(
        "Total entries in {} (after filtering): {}",
        job.right.display(),
        report.right_count
    );
    log::info!(
        "Common entries: {}",
        report.common.if_supports_color(Stdout, |t| t.green())
    );
    log::info!("Only in {}: {}", job.left.display(), report.only_in_left.len());
    log::info!("Only in {}: {}", job.right.display(), report.only_in_right.len());

    print_difference(&job.left, &job.right, &report.only_in_left, limit);
    print_difference(&job.right, &job.left, &report.only_in_right, limit);

    if outcome.left_output.is_some() || outcome.right_output.is_some() {
        crate::log_blank();
    }
    if let Some(path) = &outcome.left_output {
        log::info!(
            "Saved entries only in {} to: {}",
            job.left.display(),
            path.display().if_supports_color(Stdout, |t| t.cyan()),
        );
    }
    if let Some(path) = &outcome.right_output {
        log::info!(
            "Saved entries only in {} to: {}",
            job.right.display(),
            path.display().if_supports_color(Stdout, |t| t.cyan()),
        );
    }
    if report.is_identical() {
        log::info!(
            "{} Lists match",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        );
    }
    Ok(())
}

/// Print entries present in `side` but missing from `other`, or a note when
/// there are too many to show inline.
fn print_difference(side: &Path, other: &Path, entries: &[String], limit: usize) {
    if entries.is_empty() {
        return;
    }

    crate::log_blank();
    log_rule();
    log::info!(
        "{}",
        format!(
            "ENTRIES ONLY IN {} (missing from {}): {} entries",
            side.display(),
            other.display(),
            entries.len()
        )
        .if_supports_color(Stdout, |t| t.yellow()),
    );
    log_rule();

    if let Some(shown) = displayable_entries(entries, limit) {
        for (i, entry) in shown.iter().enumerate() {
            log::info!("{}. {}", i + 1, entry);
        }
    } else {
        log::info!(
            "{}",
            "(Too many to display, saving to file...)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}
