mod google_synthesizer;

pub use google_synthesizer::GoogleSpeechSynthesizer;
