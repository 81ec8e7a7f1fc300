use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use dubrovnik::application::ports::{
    AudioExtractor, AudioExtractorError, AudioTrack, RecognitionError, SpeechRecognizer,
    SpeechSynthesizer, SynthesisError, TranslationError, Translator,
};
use dubrovnik::application::services::{DubbingService, IntakeService, SessionRegistry};
use dubrovnik::domain::{LanguageCode, Transcript};
use dubrovnik::presentation::{AppState, Settings, create_router};

const BOUNDARY: &str = "test-boundary";

struct MockExtractor;

impl AudioExtractor for MockExtractor {
    fn extract(&self, _data: &[u8]) -> Result<AudioTrack, AudioExtractorError> {
        Ok(AudioTrack {
            wav_bytes: vec![0u8; 64],
            sample_rate: 16_000,
            duration_secs: 5.0,
        })
    }
}

struct FailingExtractor;

impl AudioExtractor for FailingExtractor {
    fn extract(&self, _data: &[u8]) -> Result<AudioTrack, AudioExtractorError> {
        Err(AudioExtractorError::DecodingFailed("probe: bad container".to_string()))
    }
}

struct MockRecognizer {
    calls: AtomicUsize,
}

impl MockRecognizer {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl SpeechRecognizer for MockRecognizer {
    async fn recognize(&self, _wav: &[u8]) -> Result<Option<Transcript>, RecognitionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Some(Transcript::new(
            "hello world".to_string(),
            Some("en".to_string()),
        )))
    }
}

struct SilentRecognizer;

#[async_trait::async_trait]
impl SpeechRecognizer for SilentRecognizer {
    async fn recognize(&self, _wav: &[u8]) -> Result<Option<Transcript>, RecognitionError> {
        Ok(None)
    }
}

struct MockTranslator;

#[async_trait::async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        target: LanguageCode,
    ) -> Result<String, TranslationError> {
        if text == "hello world" && target == LanguageCode::Es {
            return Ok("hola mundo".to_string());
        }
        Ok(format!("{}:{}", target.as_str(), text))
    }
}

struct MockSynthesizer;

#[async_trait::async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        language: LanguageCode,
    ) -> Result<Vec<u8>, SynthesisError> {
        Ok(format!("mp3[{}][{}]", language.as_str(), text).into_bytes())
    }
}

fn build_router<E, R>(extractor: E, recognizer: R) -> Router
where
    E: AudioExtractor + 'static,
    R: SpeechRecognizer + 'static,
{
    let extractor = Arc::new(extractor);
    let recognizer = Arc::new(recognizer);
    let translator = Arc::new(MockTranslator);
    let synthesizer = Arc::new(MockSynthesizer);
    let session_registry = Arc::new(SessionRegistry::new());

    let state = AppState {
        intake_service: Arc::new(IntakeService::new(
            extractor,
            recognizer,
            Arc::clone(&session_registry),
        )),
        dubbing_service: Arc::new(DubbingService::new(
            translator,
            synthesizer,
            Arc::clone(&session_registry),
        )),
        session_registry,
        settings: Settings::from_env(),
    };

    create_router(state)
}

fn multipart_upload(filename: &str, content: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\nContent-Type: video/mp4\r\n\r\n",
            BOUNDARY, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/v1/uploads")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

fn translate_request(session_id: &str, target: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/api/v1/sessions/{}/translate", session_id))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(format!(
            "{{\"target_language\": \"{}\"}}",
            target
        )))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn given_valid_video_when_uploading_then_returns_transcript_and_detected_language() {
    let router = build_router(MockExtractor, MockRecognizer::new());

    let response = router
        .oneshot(multipart_upload("clip.mp4", b"fake video bytes"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["transcript"], "hello world");
    assert_eq!(body["detected_language"], "en");
    assert!(body["session_id"].as_str().is_some());
}

#[tokio::test]
async fn given_unsupported_extension_when_uploading_then_returns_unsupported_media_type() {
    let router = build_router(MockExtractor, MockRecognizer::new());

    let response = router
        .oneshot(multipart_upload("notes.txt", b"not a video"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn given_no_file_field_when_uploading_then_returns_bad_request() {
    let router = build_router(MockExtractor, MockRecognizer::new());

    let body = format!("--{}--\r\n", BOUNDARY);
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/uploads")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_undecodable_upload_when_uploading_then_fails_and_skips_recognition() {
    let recognizer = Arc::new(MockRecognizer::new());
    let extractor = Arc::new(FailingExtractor);
    let session_registry = Arc::new(SessionRegistry::new());
    let state = AppState {
        intake_service: Arc::new(IntakeService::new(
            extractor,
            Arc::clone(&recognizer),
            Arc::clone(&session_registry),
        )),
        dubbing_service: Arc::new(DubbingService::new(
            Arc::new(MockTranslator),
            Arc::new(MockSynthesizer),
            Arc::clone(&session_registry),
        )),
        session_registry,
        settings: Settings::from_env(),
    };
    let router = create_router(state);

    let response = router
        .oneshot(multipart_upload("corrupt.mkv", b"\xff\xff\xff"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(recognizer.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_speechless_audio_when_uploading_then_no_transcript_and_translate_conflicts() {
    let router = build_router(MockExtractor, SilentRecognizer);

    let response = router
        .clone()
        .oneshot(multipart_upload("quiet.mov", b"video"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["transcript"].is_null());
    let session_id = body["session_id"].as_str().unwrap().to_string();

    let response = router
        .oneshot(translate_request(&session_id, "es"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn given_unknown_session_when_translating_then_returns_not_found() {
    let router = build_router(MockExtractor, MockRecognizer::new());

    let response = router
        .oneshot(translate_request(
            "00000000-0000-0000-0000-000000000000",
            "fr",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_out_of_set_language_code_when_translating_then_rejected_at_boundary() {
    let router = build_router(MockExtractor, MockRecognizer::new());

    let response = router
        .clone()
        .oneshot(multipart_upload("clip.mp4", b"video"))
        .await
        .unwrap();
    let body = json_body(response).await;
    let session_id = body["session_id"].as_str().unwrap().to_string();

    let response = router
        .oneshot(translate_request(&session_id, "xx"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn given_english_clip_when_translating_to_spanish_then_full_pipeline_produces_download() {
    let router = build_router(MockExtractor, MockRecognizer::new());

    let response = router
        .clone()
        .oneshot(multipart_upload("clip.mp4", b"five seconds of speech"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["transcript"], "hello world");
    assert_eq!(body["detected_language"], "en");
    let session_id = body["session_id"].as_str().unwrap().to_string();

    let response = router
        .clone()
        .oneshot(translate_request(&session_id, "es"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["translated_text"], "hola mundo");
    let audio_url = body["audio_url"].as_str().unwrap().to_string();

    let response = router
        .oneshot(
            Request::builder()
                .uri(audio_url)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE].to_str().unwrap(),
        "audio/mp3"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap(),
        "attachment; filename=\"translated_audio.mp3\""
    );
    let audio = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(audio.as_ref(), b"mp3[es][hola mundo]");
}

#[tokio::test]
async fn given_repeat_translate_when_downloading_then_second_run_replaces_artifact() {
    let router = build_router(MockExtractor, MockRecognizer::new());

    let response = router
        .clone()
        .oneshot(multipart_upload("clip.mp4", b"video"))
        .await
        .unwrap();
    let body = json_body(response).await;
    let session_id = body["session_id"].as_str().unwrap().to_string();

    let response = router
        .clone()
        .oneshot(translate_request(&session_id, "es"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .clone()
        .oneshot(translate_request(&session_id, "fr"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(
            Request::builder()
                .uri(format!("/api/v1/sessions/{}/audio", session_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let audio = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    // Only the second run's artifact exists.
    assert_eq!(audio.as_ref(), b"mp3[fr][fr:hello world]");
}

#[tokio::test]
async fn given_every_target_in_set_when_translating_then_produces_text_and_audio() {
    let router = build_router(MockExtractor, MockRecognizer::new());

    let response = router
        .clone()
        .oneshot(multipart_upload("clip.mp4", b"video"))
        .await
        .unwrap();
    let body = json_body(response).await;
    let session_id = body["session_id"].as_str().unwrap().to_string();

    for code in LanguageCode::ALL {
        let response = router
            .clone()
            .oneshot(translate_request(&session_id, code.as_str()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "target {}", code.as_str());
        let body = json_body(response).await;
        assert!(!body["translated_text"].as_str().unwrap().is_empty());

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/sessions/{}/audio", session_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let audio = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(!audio.is_empty());
    }
}

#[tokio::test]
async fn given_session_without_translation_when_downloading_then_returns_not_found() {
    let router = build_router(MockExtractor, MockRecognizer::new());

    let response = router
        .clone()
        .oneshot(multipart_upload("clip.mp4", b"video"))
        .await
        .unwrap();
    let body = json_body(response).await;
    let session_id = body["session_id"].as_str().unwrap().to_string();

    let response = router
        .oneshot(
            Request::builder()
                .uri(format!("/api/v1/sessions/{}/audio", session_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_language_listing_when_requested_then_returns_full_closed_set() {
    let router = build_router(MockExtractor, MockRecognizer::new());

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/languages")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let codes: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["en", "te", "es", "fr", "de", "hi", "zh", "ja", "ar"]);
}

#[tokio::test]
async fn given_health_check_when_requested_then_returns_healthy() {
    let router = build_router(MockExtractor, MockRecognizer::new());

    let response = router
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
