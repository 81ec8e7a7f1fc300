/// Decodes an uploaded video container into the audio track the pipeline
/// feeds to speech recognition: 16 kHz mono PCM in a WAV container.
pub trait AudioExtractor: Send + Sync {
    fn extract(&self, data: &[u8]) -> Result<AudioTrack, AudioExtractorError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct AudioTrack {
    pub wav_bytes: Vec<u8>,
    pub sample_rate: u32,
    pub duration_secs: f32,
}

#[derive(Debug, thiserror::Error)]
pub enum AudioExtractorError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("no audio track found")]
    NoAudioTrack,
    #[error("audio encoding failed: {0}")]
    EncodingFailed(String),
}
