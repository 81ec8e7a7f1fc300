use std::sync::Arc;

use crate::application::ports::{SpeechSynthesizer, SynthesisError, TranslationError, Translator};
use crate::application::services::session_registry::{SessionNotFound, SessionRegistry};
use crate::domain::{LanguageCode, SessionId, Translation};

/// Second half of the pipeline, triggered by the explicit translate
/// action: translate the session's transcript and synthesize speech for
/// the result. A repeat run on the same session overwrites the session's
/// output artifact.
pub struct DubbingService<T, S>
where
    T: Translator,
    S: SpeechSynthesizer,
{
    translator: Arc<T>,
    synthesizer: Arc<S>,
    registry: Arc<SessionRegistry>,
}

impl<T, S> DubbingService<T, S>
where
    T: Translator,
    S: SpeechSynthesizer,
{
    pub fn new(translator: Arc<T>, synthesizer: Arc<S>, registry: Arc<SessionRegistry>) -> Self {
        Self {
            translator,
            synthesizer,
            registry,
        }
    }

    pub async fn dub(
        &self,
        session_id: SessionId,
        target: LanguageCode,
    ) -> Result<Translation, DubbingError> {
        let transcript = self
            .registry
            .transcript(session_id)
            .await?
            .ok_or(DubbingError::NoTranscript)?;

        // The detected language is not checked against the target; if they
        // coincide the translation round trip still happens.
        let translated = self.translator.translate(&transcript.text, target).await?;

        tracing::info!(
            target = target.as_str(),
            chars = translated.len(),
            "Translation completed"
        );

        let audio = self.synthesizer.synthesize(&translated, target).await?;

        let output_path = self.registry.output_artifact_path(session_id).await?;
        tokio::fs::write(&output_path, &audio).await?;

        tracing::info!(
            bytes = audio.len(),
            path = %output_path.display(),
            "Synthesized audio written"
        );

        Ok(Translation::new(translated, target))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DubbingError {
    #[error("session not found")]
    SessionNotFound(#[from] SessionNotFound),
    #[error("nothing to translate: session has no transcript")]
    NoTranscript,
    #[error("translation: {0}")]
    Translation(#[from] TranslationError),
    #[error("synthesis: {0}")]
    Synthesis(#[from] SynthesisError),
    #[error("artifact write: {0}")]
    ArtifactWrite(#[from] std::io::Error),
}
