//! CLI サブコマンドの実装

pub mod convert;
pub mod download;
pub mod init;
mod input;
pub mod upload;

use std::io::Write;

use crate::config::TransifexSettings;
use crate::error::CliError;

/// `Doing something... done.` 形式の進捗表示 (done は [`progress_done`])
fn progress(message: impl AsRef<str>) {
    print!("{}... ", message.as_ref());
    let _ = std::io::stdout().flush();
}

fn progress_done() {
    println!("done.");
}

/// Ensure the credentials and slugs required by the remote commands are
/// configured.
fn require_service(settings: &TransifexSettings) -> Result<(), CliError> {
    if settings.username.is_empty() {
        return Err(CliError::MissingOption("transifex.username"));
    }
    if settings.password.is_empty() {
        return Err(CliError::MissingOption("transifex.password"));
    }
    if settings.project.is_empty() {
        return Err(CliError::MissingOption("transifex.project"));
    }
    if settings.resource.is_empty() {
        return Err(CliError::MissingOption("transifex.resource"));
    }
    Ok(())
}
