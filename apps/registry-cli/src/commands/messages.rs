use registry_client::{ClientResult, RegistryClient};
use registry_shared::Message;
use serde_json::{Value, json};

use super::MessageCommand;
use super::input::{print_created, print_json, print_ok};
use crate::state::AppState;

pub async fn run(state: &AppState, command: MessageCommand) -> anyhow::Result<()> {
    let api = state.client.messages();
    match command {
        MessageCommand::Create(input) => {
            let message: Message = input.parse()?;
            print_created(api.create(&message).await?)
        }
        MessageCommand::Read { id } => print_json(&api.read(id).await?),
        MessageCommand::Count => print_json(&api.count().await?),
        MessageCommand::Update(input) => {
            let message: Message = input.parse()?;
            api.update(&message).await?;
            print_ok()
        }
        MessageCommand::MarkRead { ids } => {
            api.mark_read(&ids).await?;
            print_ok()
        }
        MessageCommand::Conversations { email, mark_read } => {
            print_json(&conversations(&state.client, &email, mark_read).await?)
        }
        MessageCommand::Delete { id } => {
            api.delete(id).await?;
            print_ok()
        }
        MessageCommand::DeleteAll { email } => {
            api.delete_all_for_user(&email).await?;
            print_ok()
        }
    }
}

/// Conversations of `email` plus the ids still unread by it. With
/// `mark_read` those messages are marked read on the server first.
async fn conversations(
    client: &RegistryClient,
    email: &str,
    mark_read: bool,
) -> ClientResult<Value> {
    let email = email.trim();
    let api = client.messages();

    let mut conversations = api.all_for_user(email).await?;
    let mut unread = conversations.unread_ids(email);

    if mark_read && !unread.is_empty() {
        api.mark_read(&unread).await?;
        conversations.mark_read(&unread);
        tracing::info!(count = unread.len(), "Marked conversations read");
        unread.clear();
    }

    Ok(json!({
        "conversations": conversations,
        "unread": unread,
    }))
}
