pub mod wav_encoder;

mod symphonia_extractor;

pub use symphonia_extractor::SymphoniaExtractor;
