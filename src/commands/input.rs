//! コマンド入力の読み込み (ローカルファイルまたはリモート URL)

use std::path::Path;

use crate::error::CliError;

/// `scheme://…` 形式なら URL とみなす (scheme は英数字と `_` のみ)。
fn is_url(source: &str) -> bool {
    source.split_once("://").is_some_and(|(scheme, rest)| {
        !scheme.is_empty()
            && !rest.is_empty()
            && scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    })
}

/// Read the full content of a local file or a remote URL.
pub(super) async fn read_text(source: &str) -> Result<String, CliError> {
    if is_url(source) {
        tracing::debug!(url = source, "fetching remote input");
        let response = reqwest::get(source)
            .await
            .map_err(|e| CliError::Fetch { url: source.to_string(), source: e })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CliError::FetchStatus {
                url: source.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| CliError::Fetch { url: source.to_string(), source: e })
    } else {
        let path = Path::new(source);
        if !path.is_file() {
            return Err(CliError::InputNotFound(source.to_string()));
        }
        std::fs::read_to_string(path)
            .map_err(|e| CliError::ReadFile { path: source.to_string(), source: e })
    }
}
