// Message Store Port (Interface)

use crate::domain::{Message, MessageId, UserId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for Message persistence
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Insert a new message
    async fn insert(&self, message: &Message) -> Result<()>;

    /// Find message by ID
    async fn find_by_id(&self, id: &MessageId) -> Result<Option<Message>>;

    /// All messages exchanged between two users, oldest first
    async fn conversation(&self, user_a: &UserId, user_b: &UserId) -> Result<Vec<Message>>;

    /// Mark a message as read; returns the updated message
    async fn mark_read(&self, id: &MessageId) -> Result<Option<Message>>;

    /// Delete a message; returns whether a row was removed
    async fn delete(&self, id: &MessageId) -> Result<bool>;
}
