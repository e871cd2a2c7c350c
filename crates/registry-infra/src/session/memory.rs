//! In-memory session store - lives as long as the process.

use async_trait::async_trait;
use tokio::sync::RwLock;

use registry_core::SessionId;
use registry_core::ports::{SessionError, SessionStore};

/// Session held in an async `RwLock`.
///
/// Note: the session is lost on process restart.
pub struct InMemorySessionStore {
    session: RwLock<Option<SessionId>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            session: RwLock::new(None),
        }
    }

    /// Start with a known session, e.g. one passed on the command line.
    pub fn with_session(session: SessionId) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self) -> Result<Option<SessionId>, SessionError> {
        Ok(self.session.read().await.clone())
    }

    async fn set(&self, session: &SessionId) -> Result<(), SessionError> {
        *self.session.write().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        *self.session.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.get().await.unwrap(), None);

        store.set(&SessionId::new("abc")).await.unwrap();
        assert_eq!(store.get().await.unwrap(), Some(SessionId::new("abc")));
    }

    #[tokio::test]
    async fn test_set_replaces_and_clear_forgets() {
        let store = InMemorySessionStore::with_session(SessionId::new("old"));
        store.set(&SessionId::new("new")).await.unwrap();
        assert_eq!(store.get().await.unwrap(), Some(SessionId::new("new")));

        store.clear().await.unwrap();
        assert_eq!(store.get().await.unwrap(), None);
    }
}
