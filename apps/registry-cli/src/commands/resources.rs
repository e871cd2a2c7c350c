use registry_shared::{Credentials, NewUser, Project, Task};

use super::input::{print_created, print_json, print_ok};
use super::{CredentialsCommand, RecordCommand, UserCommand};
use crate::state::AppState;

pub async fn projects(state: &AppState, command: RecordCommand) -> anyhow::Result<()> {
    let api = state.client.projects();
    match command {
        RecordCommand::List => print_json(&api.list().await?),
        RecordCommand::Page(page) => print_json(&api.page(page.into()).await?),
        RecordCommand::Count => print_json(&api.count().await?),
        RecordCommand::Create(input) => {
            let project: Project = input.parse()?;
            print_created(api.create(&project).await?)
        }
        RecordCommand::Update(input) => {
            let project: Project = input.parse()?;
            api.update(&project).await?;
            print_ok()
        }
        RecordCommand::Delete { id } => {
            api.delete(id).await?;
            print_ok()
        }
    }
}

pub async fn tasks(state: &AppState, command: RecordCommand) -> anyhow::Result<()> {
    let api = state.client.tasks();
    match command {
        RecordCommand::List => print_json(&api.list().await?),
        RecordCommand::Page(page) => print_json(&api.page(page.into()).await?),
        RecordCommand::Count => print_json(&api.count().await?),
        RecordCommand::Create(input) => {
            let task: Task = input.parse()?;
            print_created(api.create(&task).await?)
        }
        RecordCommand::Update(input) => {
            let task: Task = input.parse()?;
            api.update(&task).await?;
            print_ok()
        }
        RecordCommand::Delete { id } => {
            api.delete(id).await?;
            print_ok()
        }
    }
}

pub async fn users(state: &AppState, command: UserCommand) -> anyhow::Result<()> {
    match command {
        UserCommand::List => print_json(&state.client.users().list().await?),
        UserCommand::Page(page) => print_json(&state.client.users().page(page.into()).await?),
        UserCommand::Count => print_json(&state.client.users().count().await?),
        UserCommand::Create(input) => {
            let user: NewUser = input.parse()?;
            state.client.accounts().create_user(&user).await?;
            print_ok()
        }
    }
}

pub async fn credentials(state: &AppState, command: CredentialsCommand) -> anyhow::Result<()> {
    match command {
        CredentialsCommand::Create(input) => {
            let credentials: Credentials = input.parse()?;
            state
                .client
                .accounts()
                .create_credentials(&credentials)
                .await?;
            print_ok()
        }
    }
}
