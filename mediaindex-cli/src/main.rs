//! mediaindex CLI
//!
//! Command-line interface for building and comparing media-library filename
//! indexes.

mod cli_types;
mod commands;
mod error;
mod logger;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use mediaindex_lib::load_settings;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!(
            "{} {}",
            "\u{2718}".if_supports_color(Stderr, |t| t.red()),
            e,
        );
        log::logger().flush();
        std::process::exit(1);
    }
    log::logger().flush();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let quiet = cli.quiet;

    if let Commands::Config { action } = &cli.command {
        return match action {
            ConfigAction::Show => commands::config::run_config_show(cli.config.as_deref()),
            ConfigAction::Path => commands::config::run_config_path(cli.config.as_deref()),
        };
    }

    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Extract {
            input,
            output,
            field,
            record,
            format,
        } => commands::extract::run_extract(
            &settings, input, output, field, record, format, quiet,
        ),
        Commands::Collapse {
            input,
            output,
            any_suffix,
            format,
        } => commands::collapse::run_collapse(&settings, input, output, any_suffix, format),
        Commands::Scan {
            directory,
            output,
            natural,
            format,
        } => commands::scan::run_scan(&settings, directory, output, natural, format),
        Commands::Compare {
            left,
            right,
            out_dir,
            exclude,
            limit,
        } => commands::compare::run_compare(&settings, left, right, out_dir, exclude, limit),
        Commands::FixQuotes { input, output } => commands::fix_quotes::run_fix_quotes(input, output),
        Commands::Config { .. } => Ok(()),
    }
}

/// Log an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}
