//! # Registry Client
//!
//! Resource facades over the students-registry REST API.
//!
//! A [`RegistryClient`] owns the endpoint table and two injected ports: the
//! [`HttpTransport`](registry_core::ports::HttpTransport) that performs
//! requests and the [`SessionStore`](registry_core::ports::SessionStore) that
//! holds the session id. Each facade borrows the client:
//!
//! ```ignore
//! let client = RegistryClient::new(endpoints, transport, sessions);
//! client.auth().login(&LoginRequest::new("admin", "secret")).await?;
//! let page = client.projects().page(PageRequest::new(0, 10)).await?;
//! ```

pub mod api;
mod client;
pub mod error;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::{AccountsApi, AuthApi, MessagesApi, ProjectsApi, TasksApi, UsersApi};
pub use client::{RegistryClient, UpdateShape};
pub use error::{ClientError, ClientResult, OrLog};
