use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "transifex.project")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncSettings {
    /// Default path or URL of the English TRANSTEXT CSV used by `upload`.
    pub english_file: Option<String>,

    /// Default directory where `download` saves the language CSV files.
    pub translations_dir: Option<String>,

    /// TRANSTEXT format version written into encoded documents.
    pub transtext_version: String,

    pub transifex: TransifexSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransifexSettings {
    /// Base URL of the translation service API.
    pub api_url: String,

    pub username: String,
    pub password: String,

    /// Project URL slug.
    pub project: String,

    /// Resource URL slug.
    pub resource: String,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            english_file: None,
            translations_dir: None,
            transtext_version: "7.0.0.0".to_string(),
            transifex: TransifexSettings::default(),
        }
    }
}

impl Default for TransifexSettings {
    fn default() -> Self {
        Self {
            api_url: "https://www.transifex.com/api/2".to_string(),
            username: String::new(),
            password: String::new(),
            project: String::new(),
            resource: String::new(),
        }
    }
}

impl SyncSettings {
    /// # Errors
    /// - Version does not match `digits(.digits)*`
    /// - Invalid API base URL
    /// - Project/resource slug contains characters outside `[A-Za-z0-9_-]`
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if !is_dotted_numeric(&self.transtext_version) {
            errors.push(ValidationError::new(
                "transtextVersion",
                format!(
                    "'{}' is not a dotted-numeric version. Example: \"7.0.0.0\"",
                    self.transtext_version
                ),
            ));
        }

        if !self.transifex.api_url.starts_with("http://")
            && !self.transifex.api_url.starts_with("https://")
        {
            errors.push(ValidationError::new(
                "transifex.apiUrl",
                format!("'{}' is not an http(s) URL", self.transifex.api_url),
            ));
        }

        if !self.transifex.project.is_empty() && !is_slug(&self.transifex.project) {
            errors.push(ValidationError::new(
                "transifex.project",
                "The project slug may only contain letters, digits, '_' and '-'",
            ));
        }

        if !self.transifex.resource.is_empty() && !is_slug(&self.transifex.resource) {
            errors.push(ValidationError::new(
                "transifex.resource",
                "The resource slug may only contain letters, digits, '_' and '-'",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn is_dotted_numeric(version: &str) -> bool {
    !version.is_empty()
        && version
            .split('.')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
}

fn is_slug(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
