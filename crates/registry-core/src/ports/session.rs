use async_trait::async_trait;

use crate::domain::SessionId;

/// Storage for the single session identifier of this client.
///
/// Implementations hold at most one value under one key.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the current session, if any.
    async fn get(&self) -> Result<Option<SessionId>, SessionError>;

    /// Replace the current session.
    async fn set(&self, session: &SessionId) -> Result<(), SessionError>;

    /// Forget the current session.
    async fn clear(&self) -> Result<(), SessionError>;
}

/// Session store errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Storage I/O failed: {0}")]
    Io(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}
