//! # Registry Shared
//!
//! Wire types exchanged with the students-registry backend.
//! Field names follow the server's camelCase JSON; attributes this client
//! does not interpret are carried through untouched.

pub mod dto;
pub mod message;
pub mod page;
pub mod response;

pub use dto::{Credentials, LoginRequest, LoginResponse, NewUser, Project, Task, User};
pub use message::{Conversations, Message};
pub use page::Page;
pub use response::ErrorResponse;
