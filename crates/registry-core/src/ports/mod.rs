//! Ports - trait definitions for external dependencies.
//! Infrastructure implements these; the resource clients only see the traits.

mod session;
mod transport;

pub use session::{SessionError, SessionStore};
pub use transport::{ApiRequest, HttpResponse, HttpTransport, SESSION_HEADER, TransportError};
