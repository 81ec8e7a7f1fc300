use async_trait::async_trait;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::domain::LanguageCode;

const DEFAULT_BASE_URL: &str = "https://translate.google.com";

/// Client for the Google Translate text-to-speech endpoint. Returns MP3
/// bytes for the given text and language in a single request.
pub struct GoogleSpeechSynthesizer {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleSpeechSynthesizer {
    pub fn new(base_url: Option<String>) -> Self {
        let base = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/translate_tts", base.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleSpeechSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        language: LanguageCode,
    ) -> Result<Vec<u8>, SynthesisError> {
        tracing::debug!(
            language = language.as_str(),
            chars = text.len(),
            "Sending text to Google TTS"
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language.as_str()),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(format!("request: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::BAD_REQUEST || status == reqwest::StatusCode::NOT_FOUND {
            return Err(SynthesisError::UnsupportedLanguage(
                language.as_str().to_string(),
            ));
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SynthesisError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(format!("body: {}", e)))?;

        if audio.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }

        tracing::info!(
            language = language.as_str(),
            bytes = audio.len(),
            "Google TTS synthesis completed"
        );

        Ok(audio.to_vec())
    }
}
