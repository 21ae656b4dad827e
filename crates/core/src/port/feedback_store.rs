// Feedback Store Port (Interface)

use crate::domain::{ApplicationId, Feedback, FeedbackId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for Feedback persistence
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Insert new feedback
    async fn insert(&self, feedback: &Feedback) -> Result<()>;

    /// Find feedback by ID
    async fn find_by_id(&self, id: &FeedbackId) -> Result<Option<Feedback>>;

    /// All feedback left on an application
    async fn list_for_application(&self, application_id: &ApplicationId)
        -> Result<Vec<Feedback>>;

    /// Partial update; unset fields keep their stored value
    async fn update(
        &self,
        id: &FeedbackId,
        rating: Option<i32>,
        comment: Option<String>,
    ) -> Result<Option<Feedback>>;

    /// Delete feedback; returns whether a row was removed
    async fn delete(&self, id: &FeedbackId) -> Result<bool>;
}
