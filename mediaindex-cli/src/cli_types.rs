//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use mediaindex_lib::ListFormat;

#[derive(Parser)]
#[command(name = "mediaindex")]
#[command(about = "Build and compare media-library filename indexes", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Settings file to use instead of ~/.config/mediaindex/settings.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Extract filenames from an XML library export
    Extract {
        /// XML export to read
        input: PathBuf,

        /// Output file (.csv, .json or text)
        #[arg(short, long, default_value = "lib.csv")]
        output: PathBuf,

        /// Field name to extract (default: Filename)
        #[arg(long)]
        field: Option<String>,

        /// Record element name (default: Item)
        #[arg(long)]
        record: Option<String>,

        /// Output format, overriding the output file extension
        #[arg(long)]
        format: Option<ListFormat>,
    },

    /// Collapse ISO/SACD track entries (name;1, name;2, ...) into one base filename
    Collapse {
        /// Filename list to collapse (.csv, .json or text)
        input: PathBuf,

        /// Output file (default: rewrite the input in place)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Collapse on any ';' suffix, not only numeric track suffixes
        #[arg(long)]
        any_suffix: bool,

        /// List format, overriding the input file extension
        #[arg(long)]
        format: Option<ListFormat>,
    },

    /// Recursively list every file under a directory
    Scan {
        /// Directory to search recursively
        #[arg(default_value = ".")]
        directory: PathBuf,

        /// Output file (.csv, .json or text)
        #[arg(short, long, default_value = "file_paths.csv")]
        output: PathBuf,

        /// Emit files in traversal order instead of folder by folder
        #[arg(long)]
        natural: bool,

        /// Output format, overriding the output file extension
        #[arg(long)]
        format: Option<ListFormat>,
    },

    /// Compare two filename lists and save the entries unique to each
    Compare {
        /// First list (typically the library export)
        left: PathBuf,

        /// Second list (typically a directory scan)
        right: PathBuf,

        /// Directory for the only_in_*.txt files (default: current directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Extensions to ignore (e.g., .jpg,.log), replacing the configured set
        #[arg(long, value_delimiter = ',')]
        exclude: Option<Vec<String>>,

        /// Print differences inline when they have at most this many entries
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Remove wrapping quotes and doubled backslashes from a filename CSV
    FixQuotes {
        /// CSV file to fix
        input: PathBuf,

        /// Output file (default: rewrite the input in place)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings
    Show,

    /// Print the settings file path
    Path,
}
