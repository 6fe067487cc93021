use crate::config::Config;
use crate::i18n::{Language, LanguageNotFound};
use anyhow::Context;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Field in the provider response that carries the translated text
const TRANSLATION_FIELD: &str = "trans";

/// Longest slice of an error body kept in `HttpStatus`
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Everything that can go wrong between picking languages and showing a result
#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error(transparent)]
    LanguageNotFound(#[from] LanguageNotFound),

    #[error("'{0}' can only be used as a source language")]
    InvalidTarget(&'static str),

    #[error("Nothing to translate")]
    EmptyText,

    #[error("Request to translation provider failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Translation provider error ({status}): {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Response did not contain a translation: {0}")]
    Extraction(String),
}

impl TranslationError {
    /// The single line shown to the user in place of a translation
    pub fn user_message(&self) -> String {
        format!("Translation failed: {}", self)
    }
}

/// One translation job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source: Language,
    pub target: Language,
    pub text: String,
}

impl TranslationRequest {
    /// Build a request, rejecting a detection-only target and empty text
    pub fn new(
        source: Language,
        target: Language,
        text: impl Into<String>,
    ) -> Result<Self, TranslationError> {
        if target.is_auto() {
            return Err(TranslationError::InvalidTarget(target.name()));
        }

        let text = text.into();
        if text.is_empty() {
            return Err(TranslationError::EmptyText);
        }

        Ok(Self {
            source,
            target,
            text,
        })
    }

    /// Build a request from display names as shown in a language picker
    pub fn from_names(
        source_name: &str,
        target_name: &str,
        text: impl Into<String>,
    ) -> Result<Self, TranslationError> {
        let source = Language::from_name(source_name)?;
        let target = Language::from_name(target_name)?;
        Self::new(source, target, text)
    }
}

/// Form body sent to the provider; reqwest percent-encodes every field
#[derive(Debug, Serialize)]
struct FormBody<'a> {
    from: &'a str,
    to: &'a str,
    text: &'a str,
}

/// Client for the hosted text translation endpoint
#[derive(Clone)]
pub struct TranslationClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    api_host: String,
}

impl TranslationClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            api_host: config.api_host.clone(),
        })
    }

    /// Translate `request.text` and return the provider's translation
    ///
    /// Issues exactly one POST; there is no retry.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslationError> {
        info!(
            "Translating {} chars from {} to {}",
            request.text.chars().count(),
            request.source.code(),
            request.target.code()
        );

        let form = FormBody {
            from: request.source.code(),
            to: request.target.code(),
            text: &request.text,
        };

        let response = self
            .http
            .post(&self.api_url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .form(&form)
            .send()
            .await
            .map_err(TranslationError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            warn!("Translation provider returned {}", status);
            return Err(TranslationError::HttpStatus {
                status,
                body: truncate_chars(&body, MAX_ERROR_BODY_CHARS),
            });
        }

        let body = response.text().await.map_err(TranslationError::Network)?;
        debug!("Received {} byte response", body.len());

        extract_translation(&body)
    }
}

/// Pull the translated text out of a provider response body
///
/// Only the `trans` field is relied on; the rest of the provider's schema is
/// undocumented, so the first string-valued `trans` key in document order
/// wins, wherever it is nested.
pub fn extract_translation(body: &str) -> Result<String, TranslationError> {
    let document: Value = serde_json::from_str(body)
        .map_err(|e| TranslationError::Extraction(format!("invalid JSON: {}", e)))?;

    find_field(&document, TRANSLATION_FIELD)
        .map(str::to_string)
        .ok_or_else(|| {
            TranslationError::Extraction(format!("no \"{}\" field in response", TRANSLATION_FIELD))
        })
}

fn find_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    match value {
        // Map iterates in document order (serde_json "preserve_order")
        Value::Object(map) => map.iter().find_map(|(k, v)| match v {
            Value::String(s) if k == key => Some(s.as_str()),
            _ => find_field(v, key),
        }),
        Value::Array(items) => items.iter().find_map(|v| find_field(v, key)),
        _ => None,
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut truncated: String = s.chars().take(max).collect();
        truncated.push_str("...");
        truncated
    }
}
