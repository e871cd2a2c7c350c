//! Domain-level error types.

use thiserror::Error;

/// Failures while turning an [`Endpoint`](crate::Endpoint) into a URL.
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Invalid base URL: {0}")]
    InvalidBase(#[from] url::ParseError),

    #[error("Base URL cannot carry path segments: {0}")]
    CannotBeABase(String),
}
