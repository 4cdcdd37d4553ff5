use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediaindex_lib::{ExtractJob, ListFormat, Settings};

use crate::CliError;

/// Run the extract command.
pub(crate) fn run_extract(
    settings: &Settings,
    input: PathBuf,
    output: PathBuf,
    field: Option<String>,
    record: Option<String>,
    format: Option<ListFormat>,
    quiet: bool,
) -> Result<(), CliError> {
    let mut options = settings.extract_options();
    if let Some(field) = field {
        options.field = field;
    }
    if let Some(record) = record {
        options.record_element = record;
    }

    log::info!(
        "Processing {}...",
        input.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::debug!(
        "Extracting <{} {}=\"{}\"> from <{}> records",
        options.field_element,
        options.name_attribute,
        options.field,
        options.record_element,
    );

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Reading records...");

    let job = ExtractJob {
        input,
        output,
        format,
        options,
    };
    let result = mediaindex_lib::run_extract(&job, &|progress| {
        pb.set_message(format!("{} records", progress.items_processed));
        pb.suspend(|| {
            log::info!(
                "Processed {} items, found {} filenames...",
                progress.items_processed,
                progress.filenames_found,
            );
        });
    });
    pb.finish_and_clear();
    let report = result?;

    crate::log_blank();
    log::info!("Total items processed: {}", report.items_processed);
    log::info!("Total filenames found: {}", report.filenames.len());
    log::info!(
        "{} Done! {} filenames written to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        report.filenames.len(),
        job.output.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
