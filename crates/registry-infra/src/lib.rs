//! # Registry Infrastructure
//!
//! Concrete implementations of the ports defined in `registry-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No network dependencies, in-memory and file session stores only
//! - `http` - reqwest-backed [`HttpTransport`](registry_core::ports::HttpTransport)
//! - `redis` - Redis-backed session store

pub mod session;

#[cfg(feature = "http")]
pub mod transport;

// Re-exports - local stores
pub use session::{FileSessionStore, InMemorySessionStore};

#[cfg(feature = "http")]
pub use transport::{ReqwestTransport, TransportConfig};

// Re-exports - Redis
#[cfg(feature = "redis")]
pub use session::{RedisSessionConfig, RedisSessionStore};
