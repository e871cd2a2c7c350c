//! Client error taxonomy.

use thiserror::Error;

use registry_core::UrlError;
use registry_core::ports::{SessionError, TransportError};
use registry_shared::ErrorResponse;

/// Why a registry call failed.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed: network, DNS, timeout.
    #[error("Transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a non-2xx status.
    #[error("Server responded {status}: {detail}")]
    Status {
        status: u16,
        detail: String,
        body: Option<ErrorResponse>,
    },

    /// The server answered 2xx with a literal `false`.
    #[error("Server rejected {0}")]
    Rejected(&'static str),

    /// The payload did not match the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Session store failure: {0}")]
    Session(#[from] SessionError),

    #[error("No active session - login first")]
    NoSession,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] UrlError),
}

impl ClientError {
    /// HTTP status, when the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server refused the session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Log-and-discard adapter for callers that only display results.
///
/// `or_log` logs the failure at ERROR level and yields `None`, so a caller
/// can treat "failed" and "nothing to show" alike.
pub trait OrLog<T> {
    fn or_log(self, operation: &str) -> Option<T>;
}

impl<T> OrLog<T> for ClientResult<T> {
    fn or_log(self, operation: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!(operation = %operation, error = %e, "Registry call failed");
                None
            }
        }
    }
}
