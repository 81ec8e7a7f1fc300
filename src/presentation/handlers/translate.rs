use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::ports::{AudioExtractor, SpeechRecognizer, SpeechSynthesizer, Translator};
use crate::application::services::DubbingError;
use crate::domain::{LanguageCode, SessionId};
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct TranslateRequest {
    pub target_language: LanguageCode,
}

#[derive(Serialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    pub target_language: String,
    pub audio_url: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn translate_handler<E, R, T, S>(
    State(state): State<AppState<E, R, T, S>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<TranslateRequest>,
) -> impl IntoResponse
where
    E: AudioExtractor + 'static,
    R: SpeechRecognizer + 'static,
    T: Translator + 'static,
    S: SpeechSynthesizer + 'static,
{
    let session_id = SessionId::from_uuid(session_id);

    match state
        .dubbing_service
        .dub(session_id, request.target_language)
        .await
    {
        Ok(translation) => {
            tracing::info!(
                session_id = %session_id,
                target = translation.language.as_str(),
                "Translate action completed"
            );

            (
                StatusCode::OK,
                Json(TranslateResponse {
                    translated_text: translation.text,
                    target_language: translation.language.as_str().to_string(),
                    audio_url: format!("/api/v1/sessions/{}/audio", session_id),
                }),
            )
                .into_response()
        }
        Err(e) => {
            let status = match &e {
                DubbingError::SessionNotFound(_) => StatusCode::NOT_FOUND,
                DubbingError::NoTranscript => StatusCode::CONFLICT,
                DubbingError::Translation(_) | DubbingError::Synthesis(_) => {
                    StatusCode::BAD_GATEWAY
                }
                DubbingError::ArtifactWrite(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };

            tracing::error!(error = %e, session_id = %session_id, "Translate action failed");

            (
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
