mod audio_extractor;
mod speech_recognizer;
mod speech_synthesizer;
mod translator;

pub use audio_extractor::{AudioExtractor, AudioExtractorError, AudioTrack};
pub use speech_recognizer::{RecognitionError, SpeechRecognizer};
pub use speech_synthesizer::{SpeechSynthesizer, SynthesisError};
pub use translator::{TranslationError, Translator};
