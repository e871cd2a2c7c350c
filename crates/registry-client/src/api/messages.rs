use registry_core::{Endpoint, ResourceId};
use registry_shared::{Conversations, Message};

use crate::client::Gateway;
use crate::error::{ClientError, ClientResult};

/// Messaging between registry users.
pub struct MessagesApi<'a> {
    gateway: &'a Gateway,
}

impl<'a> MessagesApi<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Send a message. Id and timestamps are assigned by the server.
    pub async fn create(&self, message: &Message) -> ClientResult<Option<Message>> {
        self.gateway.create(Endpoint::CreateMessage, message).await
    }

    /// Fetch one message. The server marks it read as a side effect.
    pub async fn read(&self, id: ResourceId) -> ClientResult<Message> {
        self.gateway.fetch(Endpoint::ReadMessage(id)).await
    }

    pub async fn count(&self) -> ClientResult<u64> {
        self.gateway.fetch(Endpoint::CountMessages).await
    }

    /// Edit a message. The server keeps author, recipient and the read state
    /// of the stored copy and only takes over the editable fields.
    pub async fn update(&self, message: &Message) -> ClientResult<()> {
        self.gateway.update(Endpoint::UpdateMessage, message).await
    }

    /// Mark several messages read in one call.
    pub async fn mark_read(&self, ids: &[ResourceId]) -> ClientResult<()> {
        if ids.is_empty() {
            return Err(ClientError::InvalidArgument(
                "no message ids to mark as read".to_string(),
            ));
        }
        self.gateway.update(Endpoint::MarkMessagesRead, ids).await
    }

    /// Every conversation `email` takes part in, keyed by the other party.
    pub async fn all_for_user(&self, email: &str) -> ClientResult<Conversations> {
        let email = require_email(email)?;
        self.gateway
            .fetch(Endpoint::MessagesForUser(email.to_string()))
            .await
    }

    pub async fn delete(&self, id: ResourceId) -> ClientResult<()> {
        self.gateway.command(Endpoint::DeleteMessage(id)).await
    }

    /// Delete every message sent or received by `email`.
    pub async fn delete_all_for_user(&self, email: &str) -> ClientResult<()> {
        let email = require_email(email)?;
        self.gateway
            .command(Endpoint::DeleteMessagesForUser(email.to_string()))
            .await
    }
}

fn require_email(email: &str) -> ClientResult<&str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ClientError::InvalidArgument("email is empty".to_string()));
    }
    Ok(email)
}
