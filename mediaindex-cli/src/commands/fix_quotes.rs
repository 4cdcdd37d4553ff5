use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use mediaindex_lib::FixQuotesJob;

use crate::CliError;

/// Run the fix-quotes command.
pub(crate) fn run_fix_quotes(input: PathBuf, output: Option<PathBuf>) -> Result<(), CliError> {
    let job = FixQuotesJob { input, output };

    log::info!(
        "Reading {}...",
        job.input.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    let fixed = mediaindex_lib::run_fix_quotes(&job)?;

    log::info!("Total filenames: {}", fixed.len());
    log::info!(
        "{} Done! Fixed backslashes in {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        job.output_path().display(),
    );
    Ok(())
}
