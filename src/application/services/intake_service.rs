use std::sync::Arc;

use crate::application::ports::{AudioExtractor, AudioExtractorError, SpeechRecognizer};
use crate::application::services::session_registry::{Session, SessionRegistry};
use crate::domain::{ContainerFormat, SessionId, Transcript};

/// First half of the pipeline, triggered by the upload: decode the video's
/// audio track, write the WAV artifact into the session scratch directory,
/// and run one recognition round trip.
pub struct IntakeService<E, R>
where
    E: AudioExtractor,
    R: SpeechRecognizer,
{
    extractor: Arc<E>,
    recognizer: Arc<R>,
    registry: Arc<SessionRegistry>,
}

impl<E, R> IntakeService<E, R>
where
    E: AudioExtractor + 'static,
    R: SpeechRecognizer,
{
    pub fn new(extractor: Arc<E>, recognizer: Arc<R>, registry: Arc<SessionRegistry>) -> Self {
        Self {
            extractor,
            recognizer,
            registry,
        }
    }

    pub async fn ingest(
        &self,
        data: Vec<u8>,
        filename: String,
        container: ContainerFormat,
    ) -> Result<IntakeOutcome, IntakeError> {
        let mut session = Session::create()?;

        tracing::debug!(
            filename = %filename,
            container = container.as_str(),
            bytes = data.len(),
            "Extracting audio track"
        );

        // Decoding is CPU-bound; keep it off the reactor.
        let extractor = Arc::clone(&self.extractor);
        let track = tokio::task::spawn_blocking(move || extractor.extract(&data))
            .await
            .map_err(|e| IntakeError::ExtractionTask(e.to_string()))??;

        tokio::fs::write(session.audio_artifact_path(), &track.wav_bytes).await?;

        tracing::info!(
            duration_secs = track.duration_secs,
            sample_rate = track.sample_rate,
            "Audio extracted"
        );

        // Recognition failure is the one degraded failure in the pipeline:
        // the session proceeds with no transcript and the translate action
        // has nothing to operate on.
        let transcript = match self.recognizer.recognize(&track.wav_bytes).await {
            Ok(Some(transcript)) => {
                tracing::info!(
                    chars = transcript.text.len(),
                    language = %transcript.language,
                    "Transcription completed"
                );
                Some(transcript)
            }
            Ok(None) => {
                tracing::warn!("No speech recognized in audio");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Recognition failed, continuing without transcript");
                None
            }
        };

        if let Some(ref transcript) = transcript {
            session.set_transcript(transcript.clone());
        }

        let session_id = self.registry.insert(session).await;

        Ok(IntakeOutcome {
            session_id,
            transcript,
            duration_secs: track.duration_secs,
        })
    }
}

#[derive(Debug, Clone)]
pub struct IntakeOutcome {
    pub session_id: SessionId,
    pub transcript: Option<Transcript>,
    pub duration_secs: f32,
}

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("extraction: {0}")]
    Extraction(#[from] AudioExtractorError),
    #[error("extraction task: {0}")]
    ExtractionTask(String),
    #[error("scratch storage: {0}")]
    Scratch(#[from] std::io::Error),
}
