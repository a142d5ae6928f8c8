use thiserror::Error;

/// Defines errors that may occur while decoding TRANSTEXT CSV text.
///
/// Line-scoped variants carry the 1-based line number and the offending line
/// exactly as it appeared in the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A line that is neither a record, a directive nor recognized
    /// boilerplate, or a record line with invalid field structure.
    #[error("Bad line {line} found in language file:\n{content}")]
    BadLine {
        /// 1-based line number.
        line: usize,
        /// The offending line, untrimmed.
        content: String,
    },

    /// A second `PRIMARY_LANGID` directive in the same document.
    #[error("Duplicated PRIMARY_LANGID found at line {line}:\n{content}")]
    DuplicateLangId {
        /// 1-based line number of the second occurrence.
        line: usize,
        /// The offending line, untrimmed.
        content: String,
    },

    /// The document ended without a `PRIMARY_LANGID` directive.
    #[error("Missing PRIMARY_LANGID")]
    MissingLangId,

    /// The numeric locale id has no entry in the locale table.
    #[error("Invalid PRIMARY_LANGID: {0}")]
    UnknownLangId(u32),

    /// In source-language mode the id resolved to a non-English tag.
    #[error("Invalid PRIMARY_LANGID for the source language: {0}")]
    SourceLangId(u32),
}

/// Defines errors that may occur while encoding a catalog into TRANSTEXT CSV.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The supplied format version does not match `digits(.digits)*`.
    #[error("Missing/invalid TRANSTEXT version: {0}")]
    InvalidVersion(String),

    /// The catalog has no declared language.
    #[error("No language in catalog")]
    MissingLanguage,

    /// The catalog language cannot be resolved to a numeric locale id.
    #[error("Unknown catalog language: {0}")]
    UnknownLanguage(String),
}
