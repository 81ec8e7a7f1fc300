use async_trait::async_trait;

use crate::domain::LanguageCode;

/// One synthesis request to an external text-to-speech service, returning
/// encoded audio bytes (MP3).
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        language: LanguageCode,
    ) -> Result<Vec<u8>, SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("empty audio returned")]
    EmptyAudio,
}
