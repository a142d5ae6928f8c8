//! 翻訳サービス (Transifex API v2) との通信を担う薄いクライアント
//!
//! 扱う操作は 3 つだけ: ソースリソースの更新、言語一覧の取得、
//! 1 言語分の翻訳 (PO テキスト) の取得。

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::config::TransifexSettings;

/// HTTP and service-level errors.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx status; the message is the response body when non-empty,
    /// otherwise a plain status-code notice.
    #[error("{0}")]
    Status(String),

    /// A 2xx response whose payload does not have the expected shape.
    #[error("Invalid response from Transifex:\n{0}")]
    InvalidResponse(String),
}

/// One translation language offered by the service (source language
/// excluded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// Language code used in API paths (e.g. `de`, `pt_BR`).
    pub code: String,
    /// Human-readable name, used for the output file names.
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct ResourceDetails {
    source_language_code: String,
    available_languages: Vec<AvailableLanguage>,
}

#[derive(Debug, Deserialize)]
struct AvailableLanguage {
    code: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct TranslationPayload {
    content: String,
}

/// Narrow client for one project/resource pair.
#[derive(Debug, Clone)]
pub struct TransifexClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
    project: String,
    resource: String,
}

impl TransifexClient {
    /// Build a client from the configured service settings.
    pub fn new(settings: &TransifexSettings) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(120))
            .user_agent(concat!("transtext-sync/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: settings.api_url.trim_end_matches('/').to_string(),
            username: settings.username.clone(),
            password: settings.password.clone(),
            project: settings.project.clone(),
            resource: settings.resource.clone(),
        })
    }

    fn resource_url(&self, suffix: &str) -> String {
        format!(
            "{}/project/{}/resource/{}/{suffix}",
            self.base_url, self.project, self.resource
        )
    }

    /// Replace the resource's source-language content with the given PO text.
    ///
    /// Returns the service's response body.
    pub async fn update_source_content(&self, po: &str) -> Result<String, ApiError> {
        let url = self.resource_url("content/");
        tracing::debug!(%url, "uploading source content");

        let response = self
            .http
            .put(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(&serde_json::json!({ "content": po }))
            .send()
            .await?;

        check_status(response).await
    }

    /// List the languages the resource is translated into, excluding the
    /// source language itself.
    ///
    /// # Errors
    /// [`ApiError::InvalidResponse`] when the payload is malformed, a
    /// language entry is missing its code or name, or no translation
    /// language remains after dropping the source language.
    pub async fn translation_languages(&self) -> Result<Vec<Language>, ApiError> {
        let url = format!("{}?details", self.resource_url(""));
        tracing::debug!(%url, "listing resource languages");

        let response =
            self.http.get(&url).basic_auth(&self.username, Some(&self.password)).send().await?;
        let body = check_status(response).await?;

        parse_languages(&body).ok_or(ApiError::InvalidResponse(body))
    }

    /// Fetch one language's translation as PO text.
    pub async fn translation(&self, language_code: &str) -> Result<String, ApiError> {
        let url = self.resource_url(&format!("translation/{language_code}/"));
        tracing::debug!(%url, "downloading translation");

        let response =
            self.http.get(&url).basic_auth(&self.username, Some(&self.password)).send().await?;
        let body = check_status(response).await?;

        match serde_json::from_str::<TranslationPayload>(&body) {
            Ok(payload) if !payload.content.is_empty() => Ok(payload.content),
            _ => Err(ApiError::InvalidResponse(body)),
        }
    }
}

/// Turn a non-2xx response into an error carrying the body (or the status
/// code when the body is empty); otherwise return the body.
async fn check_status(response: reqwest::Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        return Ok(body);
    }

    let message = if body.is_empty() {
        format!("Transifex returned the error code {}", status.as_u16())
    } else {
        body
    };
    Err(ApiError::Status(message))
}

/// Validate and reshape the `?details` payload.
fn parse_languages(body: &str) -> Option<Vec<Language>> {
    let details: ResourceDetails = serde_json::from_str(body).ok()?;
    if details.source_language_code.is_empty() {
        return None;
    }

    let mut languages = Vec::new();
    for available in details.available_languages {
        if available.code.is_empty() || available.name.is_empty() {
            return None;
        }
        if available.code != details.source_language_code {
            languages.push(Language { code: available.code, name: available.name });
        }
    }

    if languages.is_empty() { None } else { Some(languages) }
}
