//! Transcript message types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author of a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// The student typed this message.
    User,
    /// The model (or the gateway's synthetic fallback) produced it.
    Model,
}

/// One entry of the append-only conversation transcript.
///
/// Owned exclusively by the chat session manager for the lifetime of one
/// student session; destroyed on logout. Insertion order is conversation
/// order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique message id.
    pub id: Uuid,

    /// Who authored the message.
    pub role: MessageRole,

    /// Plain message text (Markdown for model replies).
    pub text: String,

    /// When the message was appended.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Creates a user message with a fresh id and the current timestamp.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(MessageRole::User, text)
    }

    /// Creates a model message with a fresh id and the current timestamp.
    #[must_use]
    pub fn model(text: impl Into<String>) -> Self {
        Self::new(MessageRole::Model, text)
    }

    fn new(role: MessageRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}
