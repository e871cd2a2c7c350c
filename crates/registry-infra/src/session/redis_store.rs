//! Redis session store - shares one session between several client processes.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use registry_core::SessionId;
use registry_core::ports::{SessionError, SessionStore};

/// Redis connection configuration.
#[derive(Debug, Clone)]
pub struct RedisSessionConfig {
    /// Redis URL (e.g., redis://localhost:6379)
    pub url: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Key holding the session identifier
    pub key: String,
}

impl Default for RedisSessionConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            connect_timeout: Duration::from_secs(5),
            key: "sessionId".to_string(),
        }
    }
}

impl RedisSessionConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            connect_timeout: Duration::from_secs(
                std::env::var("REDIS_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
            key: std::env::var("REGISTRY_SESSION_KEY").unwrap_or_else(|_| "sessionId".to_string()),
        }
    }
}

/// Redis-backed session store.
///
/// Uses a connection manager for automatic reconnection.
pub struct RedisSessionStore {
    conn: ConnectionManager,
    key: String,
}

impl RedisSessionStore {
    pub async fn new(config: RedisSessionConfig) -> Result<Self, SessionError> {
        let client = Client::open(config.url.as_str())
            .map_err(|e| SessionError::Connection(e.to_string()))?;

        // Bounded so an unreachable server fails fast
        let conn = tokio::time::timeout(config.connect_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| SessionError::Connection("Connection timed out".to_string()))?
            .map_err(|e| SessionError::Connection(e.to_string()))?;

        tracing::info!(url = %config.url, key = %config.key, "Connected to Redis session store");

        Ok(Self {
            conn,
            key: config.key,
        })
    }

    /// Create from environment configuration.
    pub async fn from_env() -> Result<Self, SessionError> {
        Self::new(RedisSessionConfig::from_env()).await
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn get(&self) -> Result<Option<SessionId>, SessionError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn
            .get(&self.key)
            .await
            .map_err(|e| SessionError::Connection(e.to_string()))?;
        Ok(value.map(SessionId::from))
    }

    async fn set(&self, session: &SessionId) -> Result<(), SessionError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(&self.key, session.as_str())
            .await
            .map_err(|e| SessionError::Connection(e.to_string()))
    }

    async fn clear(&self) -> Result<(), SessionError> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(&self.key)
            .await
            .map_err(|e| SessionError::Connection(e.to_string()))
    }
}
