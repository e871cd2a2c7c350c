//! Application state - the wired registry client.

use std::sync::Arc;

use anyhow::Context;
use registry_client::{RegistryClient, UpdateShape};
use registry_core::Endpoints;
use registry_core::ports::{HttpTransport, SessionStore};
use registry_infra::{FileSessionStore, InMemorySessionStore, ReqwestTransport};

use crate::config::{AppConfig, SessionBackend};

/// Everything a command needs.
pub struct AppState {
    pub client: RegistryClient,
    pub sessions: Arc<dyn SessionStore>,
}

impl AppState {
    /// Build the state with the configured implementations.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let endpoints = Endpoints::new(&config.api_url)
            .with_context(|| format!("invalid registry URL '{}'", config.api_url))?;

        let transport: Arc<dyn HttpTransport> = Arc::new(
            ReqwestTransport::new(&config.transport).context("failed to build HTTP client")?,
        );

        let sessions = session_store(&config.session).await?;

        let update_shape = if config.legacy_update {
            tracing::warn!("Legacy update shape enabled - updates carry the session in the body");
            UpdateShape::Legacy
        } else {
            UpdateShape::Standard
        };

        let client = RegistryClient::new(endpoints, transport, sessions.clone())
            .with_update_shape(update_shape);

        tracing::debug!(base = %client.endpoints().base(), "Registry client ready");

        Ok(Self { client, sessions })
    }
}

async fn session_store(backend: &SessionBackend) -> anyhow::Result<Arc<dyn SessionStore>> {
    match backend {
        SessionBackend::File(path) => {
            tracing::debug!(path = %path.display(), "Using file session store");
            Ok(Arc::new(FileSessionStore::new(path.clone())))
        }
        SessionBackend::Memory => {
            tracing::warn!("In-memory session store - the session ends with this process");
            Ok(Arc::new(InMemorySessionStore::new()))
        }
        SessionBackend::Redis => redis_store().await,
    }
}

#[cfg(feature = "redis")]
async fn redis_store() -> anyhow::Result<Arc<dyn SessionStore>> {
    use registry_infra::RedisSessionStore;

    let store = RedisSessionStore::from_env()
        .await
        .context("failed to connect to the Redis session store")?;
    Ok(Arc::new(store))
}

#[cfg(not(feature = "redis"))]
async fn redis_store() -> anyhow::Result<Arc<dyn SessionStore>> {
    anyhow::bail!("Redis session backend requested but the `redis` feature is disabled")
}
