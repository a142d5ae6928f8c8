//! ツール設定の読み込みとバリデーション

mod loader;
mod types;

use std::path::Path;

pub use types::{
    ConfigError,
    SyncSettings,
    TransifexSettings,
    ValidationError,
};

/// Default configuration file name, looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "transtext-sync.json";

/// Load and validate the tool settings.
///
/// An explicitly requested path must exist; the default path silently falls
/// back to [`SyncSettings::default`] when absent.
///
/// # Errors
/// - The explicit configuration file does not exist
/// - ファイル読み込みまたは JSON パースエラー
/// - バリデーションエラー
pub fn load(explicit_path: Option<&Path>) -> Result<SyncSettings, ConfigError> {
    let settings = match explicit_path {
        Some(path) => loader::load_from_path(path)?
            .ok_or_else(|| ConfigError::NotFound(path.display().to_string()))?,
        None => loader::load_from_path(Path::new(CONFIG_FILE_NAME))?.unwrap_or_default(),
    };

    settings.validate().map_err(ConfigError::ValidationErrors)?;
    tracing::debug!("Settings loaded successfully: {:?}", settings);

    Ok(settings)
}
