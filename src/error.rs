//! Top-level error type for the command-line tool.
//!
//! Every variant renders the message shown verbatim on stderr; one failure
//! terminates the running command (deterministic parse/validation failures
//! are never retried).

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::gettext::PoError;
use crate::transifex::ApiError;
use crate::transtext::{
    EncodeError,
    FormatError,
};

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Po(#[from] PoError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(
        "Missing English CSV file path/URL: it's not specified neither in the command line nor in the configuration file"
    )]
    MissingEnglishFile,

    #[error(
        "Missing path to the directory where the translations will be saved: it's not specified neither in the command line nor in the configuration file"
    )]
    MissingTranslationsDir,

    #[error("Missing/invalid {0} value in configuration")]
    MissingOption(&'static str),

    #[error("Empty input file: {0}")]
    EmptyInput(String),

    #[error("no translations found!")]
    NoTranslations,

    #[error("too few translations found! ({found} entries)")]
    TooFewStrings { found: usize },

    #[error("The output file {} already exists", .0.display())]
    OutputExists(PathBuf),

    #[error("Unable to find the file '{0}'")]
    InputNotFound(String),

    #[error("Failed to read from file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to retrieve the content of '{url}': {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to download '{url}' (HTTP {status})")]
    FetchStatus { url: String, status: u16 },

    #[error("Unable to create directory {}: {}", .path.display(), .source)]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {}", .path.display(), .source)]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
