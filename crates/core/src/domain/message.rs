// Message Domain Model

use serde::{Deserialize, Serialize};

use super::user::UserId;

/// Message ID (UUID v4)
pub type MessageId = String;

/// Direct message between two users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub content: String,
    pub sent_at: i64, // epoch ms
    pub is_read: bool,
}

impl Message {
    pub fn new(
        id: impl Into<String>,
        sender_id: impl Into<String>,
        receiver_id: impl Into<String>,
        content: impl Into<String>,
        sent_at: i64,
    ) -> Self {
        Self {
            id: id.into(),
            sender_id: sender_id.into(),
            receiver_id: receiver_id.into(),
            content: content.into(),
            sent_at,
            is_read: false,
        }
    }
}
