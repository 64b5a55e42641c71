//! Chat message types.
//!
//! This module contains types for representing individual utterances in a
//! chat conversation, including the sender and message content.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents the sender of a chat message.
///
/// Serialized as `"user"` / `"ai"` in the persisted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Message from the user.
    User,
    /// Message from the AI travel assistant.
    Ai,
}

/// A single message in a chat conversation.
///
/// Each message has a stable unique id, a sender, text content, and a
/// timestamp used for display ordering and relative-time rendering.
/// Messages are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message identifier, stable for the message's lifetime.
    pub id: String,
    /// The text body of the message.
    pub content: String,
    /// Who sent the message.
    pub sender: Sender,
    /// When the message was created (stored as ISO 8601).
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Creates a new message with a generated id, timestamped now.
    pub fn new(content: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            sender,
            timestamp: Utc::now(),
        }
    }
}
