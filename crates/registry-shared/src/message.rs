//! Messages exchanged between registry users.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single message. Timestamps are epoch milliseconds, `0` meaning unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Message {
    pub id: i64,
    pub author: String,
    pub recipient: String,
    pub text: String,
    pub create_date: i64,
    pub edit_date: i64,
    pub read_date: i64,
    pub edited: bool,
    pub read: bool,
}

impl Message {
    /// Draft a new message. The server assigns id and timestamps.
    pub fn new(
        author: impl Into<String>,
        recipient: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            recipient: recipient.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.create_date)
    }

    pub fn edited_at(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.edit_date)
    }

    pub fn read_at(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.read_date)
    }
}

fn millis_to_datetime(millis: i64) -> Option<DateTime<Utc>> {
    if millis == 0 {
        return None;
    }
    DateTime::from_timestamp_millis(millis)
}

/// All messages of one user, grouped by the other party.
///
/// The server orders each conversation by creation time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conversations(pub BTreeMap<String, Vec<Message>>);

impl Conversations {
    pub fn counterparts(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn with(&self, counterpart: &str) -> &[Message] {
        self.0.get(counterpart).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ids of unread messages addressed to `recipient`, in conversation order.
    pub fn unread_ids(&self, recipient: &str) -> Vec<i64> {
        self.0
            .values()
            .flatten()
            .filter(|m| !m.read && m.recipient == recipient)
            .map(|m| m.id)
            .collect()
    }

    /// Flag the given messages as read in this local copy.
    pub fn mark_read(&mut self, ids: &[i64]) {
        self.0
            .values_mut()
            .flatten()
            .filter(|m| ids.contains(&m.id))
            .for_each(|m| m.read = true);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
