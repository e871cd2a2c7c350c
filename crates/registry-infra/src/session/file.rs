//! File-backed session store - survives restarts, like browser local storage.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use registry_core::SessionId;
use registry_core::ports::{SessionError, SessionStore};

/// On-disk layout: a single `sessionId` key.
#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    #[serde(rename = "sessionId")]
    session_id: SessionId,
}

/// Session persisted as a small JSON document.
///
/// A missing file means "no session". Writes land in a uniquely named temp
/// file in the same directory (owner-only permissions) and are renamed into
/// place.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Write `bytes` to `path` through an owner-only temp file.
fn write_private(path: &Path, bytes: &[u8]) -> Result<(), SessionError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir).map_err(|e| SessionError::Io(e.to_string()))?;

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| SessionError::Io(e.to_string()))?;
    temp.write_all(bytes)
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| SessionError::Io(e.to_string()))?;
    temp.persist(path)
        .map_err(|e| SessionError::Io(e.error.to_string()))?;
    Ok(())
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self) -> Result<Option<SessionId>, SessionError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SessionError::Io(e.to_string())),
        };

        let file: SessionFile = serde_json::from_slice(&bytes)
            .map_err(|e| SessionError::Serialization(e.to_string()))?;
        Ok(Some(file.session_id))
    }

    async fn set(&self, session: &SessionId) -> Result<(), SessionError> {
        let bytes = serde_json::to_vec(&SessionFile {
            session_id: session.clone(),
        })
        .map_err(|e| SessionError::Serialization(e.to_string()))?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_private(&path, &bytes))
            .await
            .map_err(|e| SessionError::Io(e.to_string()))??;

        tracing::debug!(path = %self.path.display(), "Session persisted");
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Io(e.to_string())),
        }
    }
}
