use dubrovnik::application::services::{Session, SessionRegistry};
use dubrovnik::domain::{SessionId, Transcript};

#[test]
fn given_session_when_dropped_then_scratch_directory_is_removed() {
    let session = Session::create().unwrap();
    let audio_path = session.audio_artifact_path();
    let scratch_dir = audio_path.parent().unwrap().to_path_buf();

    std::fs::write(&audio_path, b"pcm").unwrap();
    assert!(scratch_dir.exists());

    drop(session);

    assert!(!scratch_dir.exists());
}

#[test]
fn given_session_when_resolving_artifacts_then_paths_share_scratch_directory() {
    let session = Session::create().unwrap();

    let audio = session.audio_artifact_path();
    let output = session.output_artifact_path();

    assert_eq!(audio.parent(), output.parent());
    assert_eq!(audio.file_name().unwrap(), "audio.wav");
    assert_eq!(output.file_name().unwrap(), "translated_audio.mp3");
}

#[test]
fn given_two_sessions_when_resolving_output_paths_then_they_never_collide() {
    let first = Session::create().unwrap();
    let second = Session::create().unwrap();

    assert_ne!(first.output_artifact_path(), second.output_artifact_path());
}

#[tokio::test]
async fn given_registered_session_when_reading_transcript_then_returns_it() {
    let registry = SessionRegistry::new();

    let mut session = Session::create().unwrap();
    session.set_transcript(Transcript::new(
        "hello world".to_string(),
        Some("en".to_string()),
    ));
    let id = registry.insert(session).await;

    let transcript = registry.transcript(id).await.unwrap().unwrap();
    assert_eq!(transcript.text, "hello world");
}

#[tokio::test]
async fn given_unknown_id_when_reading_registry_then_returns_not_found() {
    let registry = SessionRegistry::new();

    assert!(registry.transcript(SessionId::new()).await.is_err());
    assert!(registry.output_artifact_path(SessionId::new()).await.is_err());
}
