//! `init` コマンド: デフォルト設定ファイルを生成する

use std::path::Path;

use crate::config::{
    self,
    ConfigError,
    SyncSettings,
};
use crate::error::CliError;

/// Write a default configuration file, refusing to overwrite an existing
/// one.
pub fn run(path: Option<&Path>) -> Result<(), CliError> {
    let path = path.unwrap_or_else(|| Path::new(config::CONFIG_FILE_NAME));
    if path.exists() {
        return Err(CliError::OutputExists(path.to_path_buf()));
    }

    let json =
        serde_json::to_string_pretty(&SyncSettings::default()).map_err(ConfigError::ParseError)?;
    std::fs::write(path, format!("{json}\n"))
        .map_err(|e| CliError::WriteFile { path: path.to_path_buf(), source: e })?;

    println!("Configuration file created at {}.", path.display());
    println!("Customize it before running the upload/download commands.");

    Ok(())
}
