// Job Store Port (Interface)

use crate::domain::{JobId, JobPosting};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for JobPosting persistence
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Insert a new job posting
    async fn insert(&self, job: &JobPosting) -> Result<()>;

    /// Find job posting by ID
    async fn find_by_id(&self, id: &JobId) -> Result<Option<JobPosting>>;

    /// List all job postings, newest first
    async fn list(&self) -> Result<Vec<JobPosting>>;

    /// Update a job posting in full
    async fn update(&self, job: &JobPosting) -> Result<()>;

    /// Delete a job posting (applications and view counters cascade)
    async fn delete(&self, id: &JobId) -> Result<()>;
}
