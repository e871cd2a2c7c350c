//! # Registry Core
//!
//! The domain layer of the students-registry client.
//! Session identity, the endpoint table and the ports that infrastructure
//! implements. No I/O happens in this crate.

pub mod domain;
pub mod endpoints;
pub mod error;
pub mod ports;

pub use domain::{PageRequest, ResourceId, SessionId};
pub use endpoints::{Endpoint, Endpoints, Method};
pub use error::UrlError;
