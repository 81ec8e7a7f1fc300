use std::collections::HashMap;
use std::path::PathBuf;

use tempfile::TempDir;
use tokio::sync::RwLock;

use crate::domain::{SessionId, Transcript};

pub const AUDIO_ARTIFACT_FILENAME: &str = "audio.wav";
pub const OUTPUT_ARTIFACT_FILENAME: &str = "translated_audio.mp3";

/// One upload's pipeline state. The session owns its scratch directory;
/// every artifact lives inside it and is removed with it when the session
/// is dropped, on success and failure alike.
pub struct Session {
    id: SessionId,
    scratch: TempDir,
    transcript: Option<Transcript>,
}

impl Session {
    pub fn create() -> std::io::Result<Self> {
        Ok(Self {
            id: SessionId::new(),
            scratch: TempDir::new()?,
            transcript: None,
        })
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Decoded PCM artifact consumed by speech recognition.
    pub fn audio_artifact_path(&self) -> PathBuf {
        self.scratch.path().join(AUDIO_ARTIFACT_FILENAME)
    }

    /// Synthesized output artifact. Namespaced by the session's scratch
    /// directory, so concurrent sessions never write the same path.
    pub fn output_artifact_path(&self) -> PathBuf {
        self.scratch.path().join(OUTPUT_ARTIFACT_FILENAME)
    }

    pub fn transcript(&self) -> Option<&Transcript> {
        self.transcript.as_ref()
    }

    /// Set during intake, before the session is registered. Never mutated
    /// afterwards.
    pub fn set_transcript(&mut self, transcript: Transcript) {
        self.transcript = Some(transcript);
    }
}

#[derive(Debug, thiserror::Error)]
#[error("session not found")]
pub struct SessionNotFound;

/// In-memory session table for the process lifetime. Nothing survives a
/// restart.
pub struct SessionRegistry {
    sessions: RwLock<HashMap<SessionId, Session>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub async fn insert(&self, session: Session) -> SessionId {
        let id = session.id();
        self.sessions.write().await.insert(id, session);
        id
    }

    pub async fn transcript(&self, id: SessionId) -> Result<Option<Transcript>, SessionNotFound> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(&id).ok_or(SessionNotFound)?;
        Ok(session.transcript().cloned())
    }

    pub async fn output_artifact_path(&self, id: SessionId) -> Result<PathBuf, SessionNotFound> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(&id).ok_or(SessionNotFound)?;
        Ok(session.output_artifact_path())
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
