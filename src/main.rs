use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use dubrovnik::application::services::{DubbingService, IntakeService, SessionRegistry};
use dubrovnik::infrastructure::media::SymphoniaExtractor;
use dubrovnik::infrastructure::observability::{TracingConfig, init_tracing};
use dubrovnik::infrastructure::recognition::GoogleSpeechRecognizer;
use dubrovnik::infrastructure::synthesis::GoogleSpeechSynthesizer;
use dubrovnik::infrastructure::translation::GoogleTranslator;
use dubrovnik::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    let extractor = Arc::new(SymphoniaExtractor::new());
    let recognizer = Arc::new(GoogleSpeechRecognizer::new(
        settings.recognition.base_url.clone(),
        settings.recognition.api_key.clone(),
        Some(settings.recognition.language_hint.clone()),
    ));
    let translator = Arc::new(GoogleTranslator::new(settings.translation.base_url.clone()));
    let synthesizer = Arc::new(GoogleSpeechSynthesizer::new(
        settings.synthesis.base_url.clone(),
    ));

    let session_registry = Arc::new(SessionRegistry::new());

    let intake_service = Arc::new(IntakeService::new(
        extractor,
        recognizer,
        Arc::clone(&session_registry),
    ));
    let dubbing_service = Arc::new(DubbingService::new(
        translator,
        synthesizer,
        Arc::clone(&session_registry),
    ));

    let state = AppState {
        intake_service,
        dubbing_service,
        session_registry,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let host: std::net::IpAddr = settings.server.host.parse()?;
    let addr = SocketAddr::from((host, settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
