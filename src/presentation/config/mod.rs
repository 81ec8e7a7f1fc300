mod settings;

pub use settings::{
    RecognitionSettings, ServerSettings, Settings, SynthesisSettings, TranslationSettings,
    UploadSettings,
};
