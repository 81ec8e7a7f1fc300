use axum::Json;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::LanguageCode;

#[derive(Serialize)]
pub struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
}

/// The closed target-language set backing the UI selector.
pub async fn languages_handler() -> impl IntoResponse {
    let languages: Vec<LanguageOption> = LanguageCode::ALL
        .iter()
        .map(|l| LanguageOption {
            code: l.as_str(),
            name: l.display_name(),
        })
        .collect();

    Json(languages)
}
