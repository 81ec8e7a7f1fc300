use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{AudioExtractor, SpeechRecognizer, SpeechSynthesizer, Translator};
use crate::domain::ContainerFormat;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub session_id: String,
    pub transcript: Option<String>,
    pub detected_language: Option<String>,
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<E, R, T, S>(
    State(state): State<AppState<E, R, T, S>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    E: AudioExtractor + 'static,
    R: SpeechRecognizer + 'static,
    T: Translator + 'static,
    S: SpeechSynthesizer + 'static,
{
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Upload request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file uploaded".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read multipart: {}", e),
                }),
            )
                .into_response();
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();

    // Acceptance is by declared extension only; a mislabeled file fails
    // later, during extraction.
    let container = match ContainerFormat::from_filename(&filename) {
        Some(c) => c,
        None => {
            tracing::warn!(filename = %filename, "Unsupported video container");
            return (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(ErrorResponse {
                    error: format!("Unsupported video container: {}", filename),
                }),
            )
                .into_response();
        }
    };

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "Video upload received");

    match state
        .intake_service
        .ingest(data.to_vec(), filename, container)
        .await
    {
        Ok(outcome) => {
            let message = if outcome.transcript.is_some() {
                "Transcription complete".to_string()
            } else {
                "Failed to transcribe audio".to_string()
            };

            tracing::info!(
                session_id = %outcome.session_id,
                recognized = outcome.transcript.is_some(),
                "Upload processed"
            );

            (
                StatusCode::OK,
                Json(UploadResponse {
                    session_id: outcome.session_id.to_string(),
                    transcript: outcome.transcript.as_ref().map(|t| t.text.clone()),
                    detected_language: outcome.transcript.map(|t| t.language),
                    message,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Intake failed");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: format!("Failed to extract audio: {}", e),
                }),
            )
                .into_response()
        }
    }
}
