use async_trait::async_trait;

use crate::domain::LanguageCode;

/// One translation request to an external service. The whole text goes in
/// a single request regardless of length; there is no chunking and no
/// retry.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        target: LanguageCode,
    ) -> Result<String, TranslationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
