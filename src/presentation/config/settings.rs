use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    pub server: ServerSettings,
    pub recognition: RecognitionSettings,
    pub translation: TranslationSettings,
    pub synthesis: SynthesisSettings,
    pub upload: UploadSettings,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecognitionSettings {
    /// Override for tests and self-hosted gateways; the adapter default
    /// applies when unset.
    pub base_url: Option<String>,
    pub api_key: String,
    pub language_hint: String,
}

impl Default for RecognitionSettings {
    fn default() -> Self {
        Self {
            base_url: std::env::var("RECOGNITION_BASE_URL").ok(),
            api_key: std::env::var("RECOGNITION_API_KEY").unwrap_or_default(),
            language_hint: std::env::var("RECOGNITION_LANGUAGE_HINT")
                .unwrap_or_else(|_| "en-US".to_string()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationSettings {
    pub base_url: Option<String>,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            base_url: std::env::var("TRANSLATION_BASE_URL").ok(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisSettings {
    pub base_url: Option<String>,
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            base_url: std::env::var("SYNTHESIS_BASE_URL").ok(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_file_size_mb: usize,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            max_file_size_mb: std::env::var("UPLOAD_MAX_FILE_SIZE_MB")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(256),
        }
    }
}
