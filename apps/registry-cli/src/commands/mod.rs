//! Command line surface.

mod auth;
mod input;
mod messages;
mod resources;

use clap::{Args, Parser, Subcommand};
use registry_core::{PageRequest, ResourceId};

use crate::state::AppState;

pub use input::JsonInput;

#[derive(Parser, Debug)]
#[command(name = "registry-cli", version, about = "Admin client for the students registry")]
pub struct Cli {
    /// Registry API base URL (overrides REGISTRY_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the session id
    Login {
        login: String,
        #[arg(long, env = "REGISTRY_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// End the current session
    Logout,
    /// Inspect the locally stored session
    #[command(subcommand)]
    Session(SessionCommand),
    /// Registry users
    #[command(subcommand)]
    Users(UserCommand),
    /// Login credentials
    #[command(subcommand)]
    Credentials(CredentialsCommand),
    /// Projects
    #[command(subcommand)]
    Projects(RecordCommand),
    /// Tasks
    #[command(subcommand)]
    Tasks(RecordCommand),
    /// Messages between users
    #[command(subcommand)]
    Messages(MessageCommand),
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    Show,
    Clear,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Zero-based page number
    pub page: u32,
    /// Page size
    pub size: u32,
}

impl From<PageArgs> for PageRequest {
    fn from(args: PageArgs) -> Self {
        PageRequest::new(args.page, args.size)
    }
}

#[derive(Subcommand, Debug)]
pub enum RecordCommand {
    List,
    Page(PageArgs),
    Count,
    Create(JsonInput),
    Update(JsonInput),
    Delete { id: ResourceId },
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    List,
    Page(PageArgs),
    Count,
    /// Create a user profile from JSON attributes
    Create(JsonInput),
}

#[derive(Subcommand, Debug)]
pub enum CredentialsCommand {
    /// Create login credentials from JSON
    Create(JsonInput),
}

#[derive(Subcommand, Debug)]
pub enum MessageCommand {
    Create(JsonInput),
    Read {
        id: ResourceId,
    },
    Count,
    Update(JsonInput),
    MarkRead {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<ResourceId>,
    },
    /// Conversations of one user, keyed by counterpart
    Conversations {
        email: String,
        /// Mark every message received by `email` as read
        #[arg(long)]
        mark_read: bool,
    },
    Delete {
        id: ResourceId,
    },
    /// Delete every message sent or received by a user
    DeleteAll {
        email: String,
    },
}

/// Run one command against the wired state.
pub async fn run(command: Command, state: &AppState) -> anyhow::Result<()> {
    match command {
        Command::Login { login, password } => auth::login(state, login, password).await,
        Command::Logout => auth::logout(state).await,
        Command::Session(cmd) => auth::session(state, cmd).await,
        Command::Users(cmd) => resources::users(state, cmd).await,
        Command::Credentials(cmd) => resources::credentials(state, cmd).await,
        Command::Projects(cmd) => resources::projects(state, cmd).await,
        Command::Tasks(cmd) => resources::tasks(state, cmd).await,
        Command::Messages(cmd) => messages::run(state, cmd).await,
    }
}
