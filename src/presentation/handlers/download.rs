use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::{AudioExtractor, SpeechRecognizer, SpeechSynthesizer, Translator};
use crate::domain::SessionId;
use crate::presentation::state::AppState;

/// Fixed download identity for the synthesized artifact; the file on disk
/// is namespaced per session, the suggested filename is not.
pub const DOWNLOAD_FILENAME: &str = "translated_audio.mp3";
pub const DOWNLOAD_MIME_TYPE: &str = "audio/mp3";

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state))]
pub async fn download_audio_handler<E, R, T, S>(
    State(state): State<AppState<E, R, T, S>>,
    Path(session_id): Path<Uuid>,
) -> impl IntoResponse
where
    E: AudioExtractor + 'static,
    R: SpeechRecognizer + 'static,
    T: Translator + 'static,
    S: SpeechSynthesizer + 'static,
{
    let session_id = SessionId::from_uuid(session_id);

    let path = match state
        .session_registry
        .output_artifact_path(session_id)
        .await
    {
        Ok(p) => p,
        Err(e) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    match tokio::fs::read(&path).await {
        Ok(audio) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, DOWNLOAD_MIME_TYPE.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", DOWNLOAD_FILENAME),
                ),
            ],
            audio,
        )
            .into_response(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "No synthesized audio for this session".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, session_id = %session_id, "Failed to read artifact");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to read audio artifact: {}", e),
                }),
            )
                .into_response()
        }
    }
}
