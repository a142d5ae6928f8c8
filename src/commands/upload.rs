//! `upload` コマンド: 英語の TRANSTEXT カタログを翻訳サービスへ送る

use crate::config::SyncSettings;
use crate::error::CliError;
use crate::gettext;
use crate::locale::LocaleResolver;
use crate::transifex::TransifexClient;
use crate::transtext;

use super::{
    input,
    progress,
    progress_done,
    require_service,
};

/// 途中で切れたエクスポートを誤ってアップロードしないための下限値。
/// 完全なカタログはこの数を大きく超える。
const MIN_SOURCE_STRINGS: usize = 1900;

/// Upload the source-language catalog as the resource's new content.
pub async fn run(source: Option<String>, settings: &SyncSettings) -> Result<(), CliError> {
    let source = source
        .or_else(|| settings.english_file.clone())
        .filter(|s| !s.is_empty())
        .ok_or(CliError::MissingEnglishFile)?;

    progress("Reading English CSV");
    let contents = input::read_text(&source).await?;
    if contents.is_empty() {
        return Err(CliError::EmptyInput(source));
    }
    progress_done();

    progress("Parsing CSV file");
    let catalog = transtext::decode(&contents, true, &LocaleResolver::new())?;
    if catalog.is_empty() {
        return Err(CliError::NoTranslations);
    }
    if catalog.len() < MIN_SOURCE_STRINGS {
        return Err(CliError::TooFewStrings { found: catalog.len() });
    }
    progress_done();

    require_service(&settings.transifex)?;
    let client = TransifexClient::new(&settings.transifex)?;

    progress(format!(
        "Uploading the new translatable strings to Transifex ({}/{})",
        settings.transifex.project, settings.transifex.resource
    ));
    let response = client.update_source_content(&gettext::render(&catalog)).await?;
    progress_done();

    println!("Response from Transifex:");
    println!("{response}");

    Ok(())
}
