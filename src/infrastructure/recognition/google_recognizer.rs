use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{RecognitionError, SpeechRecognizer};
use crate::domain::Transcript;

const DEFAULT_BASE_URL: &str = "http://www.google.com";

/// Client for the Google Speech API v2 full-duplex recognize endpoint.
/// The request asks for the full result object; the first alternative of
/// the first non-empty result wins.
pub struct GoogleSpeechRecognizer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    language_hint: String,
}

impl GoogleSpeechRecognizer {
    pub fn new(base_url: Option<String>, api_key: String, language_hint: Option<String>) -> Self {
        let base = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/speech-api/v2/recognize", base.trim_end_matches('/')),
            api_key,
            language_hint: language_hint.unwrap_or_else(|| "en-US".to_string()),
        }
    }
}

/// The service emits one JSON object per line; the first line is usually an
/// empty result, the real one follows.
#[derive(Deserialize)]
struct RecognitionResponse {
    #[serde(default)]
    result: Vec<RecognitionResult>,
    #[serde(default)]
    language: Option<String>,
}

#[derive(Deserialize)]
struct RecognitionResult {
    #[serde(default)]
    alternative: Vec<RecognitionAlternative>,
}

#[derive(Deserialize)]
struct RecognitionAlternative {
    transcript: String,
}

#[async_trait]
impl SpeechRecognizer for GoogleSpeechRecognizer {
    async fn recognize(&self, wav_data: &[u8]) -> Result<Option<Transcript>, RecognitionError> {
        tracing::debug!(
            bytes = wav_data.len(),
            lang = %self.language_hint,
            "Sending audio to Google Speech API"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[
                ("client", "chromium"),
                ("output", "json"),
                ("lang", self.language_hint.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .header("Content-Type", "audio/l16; rate=16000")
            .body(wav_data.to_vec())
            .send()
            .await
            .map_err(|e| RecognitionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(RecognitionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RecognitionError::ApiRequestFailed(format!("body: {}", e)))?;

        for line in body.lines().filter(|l| !l.trim().is_empty()) {
            let parsed: RecognitionResponse = match serde_json::from_str(line) {
                Ok(p) => p,
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping unparseable response line");
                    continue;
                }
            };

            let transcript = parsed
                .result
                .iter()
                .flat_map(|r| r.alternative.first())
                .map(|a| a.transcript.trim().to_string())
                .find(|t| !t.is_empty());

            if let Some(text) = transcript {
                tracing::info!(chars = text.len(), "Google Speech recognition completed");
                return Ok(Some(Transcript::new(text, parsed.language)));
            }
        }

        // Unintelligible audio comes back as empty result sets only.
        Ok(None)
    }
}
