//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use registry_core::endpoints::DEFAULT_BASE_URL;
use registry_infra::TransportConfig;

/// Where the session id is kept between invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionBackend {
    File(PathBuf),
    Memory,
    Redis,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub session: SessionBackend,
    pub legacy_update: bool,
    pub transport: TransportConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup, with defaults for
    /// missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let session_file = lookup("REGISTRY_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".registry-session.json"));

        let session = match lookup("REGISTRY_SESSION_BACKEND")
            .unwrap_or_else(|| "file".to_string())
            .to_lowercase()
            .as_str()
        {
            "file" => SessionBackend::File(session_file),
            "memory" => SessionBackend::Memory,
            "redis" => SessionBackend::Redis,
            other => bail!("unknown REGISTRY_SESSION_BACKEND '{other}' (expected file, memory or redis)"),
        };

        let mut transport = TransportConfig::default();
        if let Some(secs) = lookup("REGISTRY_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .with_context(|| format!("REGISTRY_TIMEOUT_SECS is not a number: {secs}"))?;
            transport.timeout = Duration::from_secs(secs);
        }

        Ok(Self {
            api_url: lookup("REGISTRY_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            session,
            legacy_update: lookup("REGISTRY_LEGACY_UPDATE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            transport,
        })
    }
}
