//! `download` コマンド: 翻訳済みカタログを取得して言語ごとの CSV に保存する

use std::path::PathBuf;

use crate::config::SyncSettings;
use crate::error::CliError;
use crate::gettext;
use crate::locale::LocaleResolver;
use crate::transifex::TransifexClient;
use crate::transtext;

use super::{
    progress,
    progress_done,
    require_service,
};

/// Download every translation language and save `<name>.csv` files.
///
/// Languages are processed sequentially; one failed language aborts the
/// whole command.
pub async fn run(dest_dir: Option<PathBuf>, settings: &SyncSettings) -> Result<(), CliError> {
    let dir = dest_dir
        .or_else(|| {
            settings
                .translations_dir
                .clone()
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        })
        .ok_or(CliError::MissingTranslationsDir)?;

    if !dir.is_dir() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| CliError::CreateDir { path: dir.clone(), source: e })?;
    }

    require_service(&settings.transifex)?;
    let client = TransifexClient::new(&settings.transifex)?;
    let resolver = LocaleResolver::new();

    progress("Listing languages available on Transifex");
    let languages = client.translation_languages().await?;
    println!("{} languages found.", languages.len());

    for language in languages {
        println!("Working on {}", language.name);

        progress("  - downloading");
        let po = client.translation(&language.code).await?;
        progress_done();

        progress("  - parsing downloaded translations");
        let catalog = gettext::parse(&po)?;
        if catalog.is_empty() {
            return Err(CliError::NoTranslations);
        }
        progress_done();

        progress("  - converting translations to csv");
        let csv = transtext::encode(&catalog, &settings.transtext_version, &resolver)?;
        progress_done();

        let save_to = dir.join(format!("{}.csv", language.name));
        progress(format!("  - saving to {}", save_to.display()));
        std::fs::write(&save_to, csv)
            .map_err(|e| CliError::WriteFile { path: save_to.clone(), source: e })?;
        progress_done();
    }

    Ok(())
}
