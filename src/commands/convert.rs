//! ローカル変換コマンド: `csv2gettext` / `gettext2csv`

use std::path::Path;

use crate::config::SyncSettings;
use crate::error::CliError;
use crate::gettext;
use crate::locale::LocaleResolver;
use crate::transtext;

use super::{
    input,
    progress,
    progress_done,
};

/// Convert a TRANSTEXT CSV file (or URL) into a gettext PO file.
pub async fn csv_to_gettext(input_path: &str, output: &Path) -> Result<(), CliError> {
    progress("Reading input CSV file");
    let csv = input::read_text(input_path).await?;
    if csv.is_empty() {
        return Err(CliError::EmptyInput(input_path.to_string()));
    }
    progress_done();

    if output.exists() {
        return Err(CliError::OutputExists(output.to_path_buf()));
    }

    progress("Parsing CSV");
    let catalog = transtext::decode(&csv, false, &LocaleResolver::new())?;
    if catalog.is_empty() {
        return Err(CliError::NoTranslations);
    }
    progress_done();

    progress("Generating gettext");
    let po = gettext::render(&catalog);
    progress_done();

    progress("Saving gettext to file");
    std::fs::write(output, po)
        .map_err(|e| CliError::WriteFile { path: output.to_path_buf(), source: e })?;
    progress_done();

    Ok(())
}

/// Convert a gettext PO file (or URL) into a TRANSTEXT CSV file.
pub async fn gettext_to_csv(
    input_path: &str,
    output: &Path,
    settings: &SyncSettings,
) -> Result<(), CliError> {
    progress("Reading input gettext file");
    let text = input::read_text(input_path).await?;
    if text.is_empty() {
        return Err(CliError::EmptyInput(input_path.to_string()));
    }
    progress_done();

    if output.exists() {
        return Err(CliError::OutputExists(output.to_path_buf()));
    }

    progress("Parsing gettext");
    let catalog = gettext::parse(&text)?;
    if catalog.is_empty() {
        return Err(CliError::NoTranslations);
    }
    progress_done();

    progress("Generating CSV");
    let csv = transtext::encode(&catalog, &settings.transtext_version, &LocaleResolver::new())?;
    progress_done();

    progress("Saving CSV to file");
    std::fs::write(output, csv)
        .map_err(|e| CliError::WriteFile { path: output.to_path_buf(), source: e })?;
    progress_done();

    Ok(())
}
