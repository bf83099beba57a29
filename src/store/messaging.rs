//! Message log and derived conversation summaries.
//!
//! Every message is authored by the current user; inbound traffic was page
//! mock data in the original client and never reaches this store. This is a
//! one-directional log with cached per-recipient summaries, not a transport.

use super::{millis_id, CookSyncStore};
use crate::events::EventType;
use crate::storage::keys;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Immutable append-only message record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub recipient_id: String,
    pub recipient_name: String,
    #[serde(default)]
    pub recipient_avatar: Option<String>,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
    pub is_sent_by_me: bool,
}

/// Cached per-recipient summary, upserted on every send.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub recipient_id: String,
    pub recipient_name: String,
    #[serde(default)]
    pub recipient_avatar: Option<String>,
    pub last_message: String,
    pub last_message_time: DateTime<Utc>,
    pub unread_count: u32,
}

impl CookSyncStore {
    /// Appends the outbound message, then upserts the recipient's
    /// conversation: created with a zero unread count when absent, otherwise
    /// only the last-message fields move.
    pub fn send_message(
        &mut self,
        recipient_id: &str,
        recipient_name: &str,
        recipient_avatar: Option<&str>,
        content: &str,
    ) -> Result<()> {
        let now = Utc::now();
        let message = Message {
            id: millis_id(),
            recipient_id: recipient_id.to_string(),
            recipient_name: recipient_name.to_string(),
            recipient_avatar: recipient_avatar.map(str::to_string),
            content: content.to_string(),
            timestamp: now,
            is_read: false,
            is_sent_by_me: true,
        };
        self.messages.push(message);
        self.storage.save_json(keys::MESSAGES, &self.messages)?;

        if let Some(existing) = self
            .conversations
            .iter_mut()
            .find(|c| c.recipient_id == recipient_id)
        {
            existing.last_message = content.to_string();
            existing.last_message_time = now;
        } else {
            self.conversations.push(Conversation {
                id: millis_id(),
                recipient_id: recipient_id.to_string(),
                recipient_name: recipient_name.to_string(),
                recipient_avatar: recipient_avatar.map(str::to_string),
                last_message: content.to_string(),
                last_message_time: now,
                unread_count: 0,
            });
        }
        self.storage
            .save_json(keys::CONVERSATIONS, &self.conversations)?;
        self.record_event(
            EventType::MessageSent,
            json!({ "recipient_id": recipient_id }),
        );
        Ok(())
    }

    /// Linear filter over the full log; message volume is demo-scale.
    pub fn messages_with(&self, recipient_id: &str) -> Vec<Message> {
        self.messages
            .iter()
            .filter(|m| m.recipient_id == recipient_id)
            .cloned()
            .collect()
    }

    /// Irreversibly removes the summary and every message with the recipient.
    pub fn delete_conversation(&mut self, recipient_id: &str) -> Result<()> {
        self.messages.retain(|m| m.recipient_id != recipient_id);
        self.storage.save_json(keys::MESSAGES, &self.messages)?;
        self.conversations.retain(|c| c.recipient_id != recipient_id);
        self.storage
            .save_json(keys::CONVERSATIONS, &self.conversations)?;
        self.record_event(
            EventType::ConversationDeleted,
            json!({ "recipient_id": recipient_id }),
        );
        Ok(())
    }
}
