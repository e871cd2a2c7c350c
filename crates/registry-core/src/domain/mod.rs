//! Domain values shared by every resource client.

mod pagination;
mod session;

pub use pagination::PageRequest;
pub use session::SessionId;

/// Server-assigned identifier of projects, tasks and messages.
pub type ResourceId = i64;
