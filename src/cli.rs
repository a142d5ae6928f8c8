//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{
    ArgAction,
    Parser,
    Subcommand,
    ValueHint,
};

/// Move TRANSTEXT CSV catalogs to and from a gettext-based translation
/// service.
#[derive(Debug, Parser)]
#[command(name = "transtext-sync", version, about, arg_required_else_help = true)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all diagnostics except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to the configuration file
    #[arg(
        short,
        long,
        global = true,
        env = "TRANSTEXT_SYNC_CONFIG",
        value_hint = ValueHint::FilePath
    )]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Upload the translatable English strings to the translation service
    Upload {
        /// Path or URL of the English TRANSTEXT CSV (defaults to the
        /// `englishFile` configuration option)
        source: Option<String>,
    },

    /// Download the translations and save them in TRANSTEXT CSV format
    Download {
        /// Directory where the language files will be saved (defaults to the
        /// `translationsDir` configuration option)
        dest_dir: Option<PathBuf>,
    },

    /// Convert a TRANSTEXT CSV file to gettext format
    #[command(name = "csv2gettext")]
    CsvToGettext {
        /// Path or URL of the CSV file to convert
        input: String,
        /// Path of the new gettext file to create
        #[arg(value_hint = ValueHint::FilePath)]
        output: PathBuf,
    },

    /// Convert a gettext file to TRANSTEXT CSV format
    #[command(name = "gettext2csv")]
    GettextToCsv {
        /// Path or URL of the gettext file to convert
        input: String,
        /// Path of the new CSV file to create
        #[arg(value_hint = ValueHint::FilePath)]
        output: PathBuf,
    },

    /// Create a default configuration file
    Init,
}
