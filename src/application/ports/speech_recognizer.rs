use async_trait::async_trait;

use crate::domain::Transcript;

/// One blocking round trip to an external speech-recognition service.
/// `Ok(None)` means the service parsed the audio but heard no usable
/// speech; transport and protocol failures surface as errors and are
/// degraded to "no transcript" by the orchestration layer.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(&self, wav_data: &[u8]) -> Result<Option<Transcript>, RecognitionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
