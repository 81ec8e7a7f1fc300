/// Language tag used when the recognition service reports none.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Best-guess transcript of one audio artifact, with whatever language tag
/// the recognition service reported.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub text: String,
    pub language: String,
}

impl Transcript {
    pub fn new(text: String, language: Option<String>) -> Self {
        Self {
            text,
            language: language.unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string()),
        }
    }
}
