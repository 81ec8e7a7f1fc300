use async_trait::async_trait;

use crate::application::ports::{TranslationError, Translator};
use crate::domain::LanguageCode;

const DEFAULT_BASE_URL: &str = "https://translate.googleapis.com";

/// Client for the unauthenticated Google Translate `gtx` endpoint. Source
/// language is always auto-detected; the whole text goes in one request.
pub struct GoogleTranslator {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(base_url: Option<String>) -> Self {
        let base = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/translate_a/single", base.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        target: LanguageCode,
    ) -> Result<String, TranslationError> {
        tracing::debug!(
            target = target.as_str(),
            chars = text.len(),
            "Sending text to Google Translate"
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| TranslationError::ApiRequestFailed(format!("request: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::BAD_REQUEST {
            return Err(TranslationError::UnsupportedLanguage(
                target.as_str().to_string(),
            ));
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranslationError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponse(format!("parse response: {}", e)))?;

        // The gtx payload is a nested array; the translation is split into
        // segments at payload[0][i][0].
        let segments = payload
            .get(0)
            .and_then(|v| v.as_array())
            .ok_or_else(|| TranslationError::InvalidResponse("missing segments".to_string()))?;

        let translated: String = segments
            .iter()
            .filter_map(|seg| seg.get(0).and_then(|s| s.as_str()))
            .collect();

        if translated.is_empty() {
            return Err(TranslationError::InvalidResponse(
                "empty translation".to_string(),
            ));
        }

        tracing::info!(
            target = target.as_str(),
            chars = translated.len(),
            "Google translation completed"
        );

        Ok(translated)
    }
}
