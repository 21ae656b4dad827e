// FAQ Store Port (Interface)

use crate::domain::{Faq, FaqId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for FAQ persistence
#[async_trait]
pub trait FaqStore: Send + Sync {
    /// Insert a new FAQ entry
    async fn insert(&self, faq: &Faq) -> Result<()>;

    /// Find FAQ by ID
    async fn find_by_id(&self, id: &FaqId) -> Result<Option<Faq>>;

    /// List all FAQ entries
    async fn list(&self) -> Result<Vec<Faq>>;

    /// Partial update; unset fields keep their stored value
    async fn update(
        &self,
        id: &FaqId,
        question: Option<String>,
        answer: Option<String>,
        category: Option<String>,
    ) -> Result<Option<Faq>>;

    /// Delete a FAQ entry; returns whether a row was removed
    async fn delete(&self, id: &FaqId) -> Result<bool>;
}
