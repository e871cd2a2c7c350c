//! Resource facades, one per backend controller.

mod accounts;
mod auth;
mod messages;
mod projects;
mod tasks;
mod users;

pub use accounts::AccountsApi;
pub use auth::AuthApi;
pub use messages::MessagesApi;
pub use projects::ProjectsApi;
pub use tasks::TasksApi;
pub use users::UsersApi;
