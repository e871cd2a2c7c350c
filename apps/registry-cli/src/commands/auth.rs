use registry_shared::LoginRequest;
use serde_json::json;

use super::SessionCommand;
use super::input::{print_json, print_ok};
use crate::state::AppState;

pub async fn login(state: &AppState, login: String, password: String) -> anyhow::Result<()> {
    let response = state
        .client
        .auth()
        .login(&LoginRequest::new(login, password))
        .await?;

    // The session id stays out of stdout
    print_json(&json!({ "loggedIn": true, "details": response.extra }))
}

pub async fn logout(state: &AppState) -> anyhow::Result<()> {
    state.client.auth().logout().await?;
    print_ok()
}

pub async fn session(state: &AppState, command: SessionCommand) -> anyhow::Result<()> {
    match command {
        SessionCommand::Show => {
            let session = state.sessions.get().await?;
            print_json(&json!({ "active": session.is_some() }))
        }
        SessionCommand::Clear => {
            state.sessions.clear().await?;
            tracing::info!("Local session cleared");
            print_ok()
        }
    }
}
