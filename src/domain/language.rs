use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of translation targets offered by the language selector.
/// Anything outside this set is unrepresentable in the API; requests
/// carrying another code fail deserialization at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    En,
    Te,
    Es,
    Fr,
    De,
    Hi,
    Zh,
    Ja,
    Ar,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 9] = [
        Self::En,
        Self::Te,
        Self::Es,
        Self::Fr,
        Self::De,
        Self::Hi,
        Self::Zh,
        Self::Ja,
        Self::Ar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Te => "te",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::De => "de",
            Self::Hi => "hi",
            Self::Zh => "zh",
            Self::Ja => "ja",
            Self::Ar => "ar",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Te => "Telugu",
            Self::Es => "Spanish",
            Self::Fr => "French",
            Self::De => "German",
            Self::Hi => "Hindi",
            Self::Zh => "Chinese",
            Self::Ja => "Japanese",
            Self::Ar => "Arabic",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "en" => Some(Self::En),
            "te" => Some(Self::Te),
            "es" => Some(Self::Es),
            "fr" => Some(Self::Fr),
            "de" => Some(Self::De),
            "hi" => Some(Self::Hi),
            "zh" => Some(Self::Zh),
            "ja" => Some(Self::Ja),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
