use std::sync::Arc;

use crate::application::ports::{AudioExtractor, SpeechRecognizer, SpeechSynthesizer, Translator};
use crate::application::services::{DubbingService, IntakeService, SessionRegistry};
use crate::presentation::config::Settings;

pub struct AppState<E, R, T, S>
where
    E: AudioExtractor,
    R: SpeechRecognizer,
    T: Translator,
    S: SpeechSynthesizer,
{
    pub intake_service: Arc<IntakeService<E, R>>,
    pub dubbing_service: Arc<DubbingService<T, S>>,
    pub session_registry: Arc<SessionRegistry>,
    pub settings: Settings,
}

impl<E, R, T, S> Clone for AppState<E, R, T, S>
where
    E: AudioExtractor,
    R: SpeechRecognizer,
    T: Translator,
    S: SpeechSynthesizer,
{
    fn clone(&self) -> Self {
        Self {
            intake_service: Arc::clone(&self.intake_service),
            dubbing_service: Arc::clone(&self.dubbing_service),
            session_registry: Arc::clone(&self.session_registry),
            settings: self.settings.clone(),
        }
    }
}
