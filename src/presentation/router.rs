use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{AudioExtractor, SpeechRecognizer, SpeechSynthesizer, Translator};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    download_audio_handler, health_handler, index_handler, languages_handler, translate_handler,
    upload_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<E, R, T, S>(state: AppState<E, R, T, S>) -> Router
where
    E: AudioExtractor + 'static,
    R: SpeechRecognizer + 'static,
    T: Translator + 'static,
    S: SpeechSynthesizer + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let upload_limit = state.settings.upload.max_file_size_mb * 1024 * 1024;

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/v1/languages", get(languages_handler))
        .route(
            "/api/v1/uploads",
            post(upload_handler::<E, R, T, S>).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/v1/sessions/{session_id}/translate",
            post(translate_handler::<E, R, T, S>),
        )
        .route(
            "/api/v1/sessions/{session_id}/audio",
            get(download_audio_handler::<E, R, T, S>),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
