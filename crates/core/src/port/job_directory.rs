// Job Directory Port - job existence/deadline lookup for the lifecycle engine

use crate::domain::{JobId, JobPosting};
use crate::error::Result;
use async_trait::async_trait;

/// Lookup interface the lifecycle engine uses to validate job references
#[async_trait]
pub trait JobDirectory: Send + Sync {
    /// Fetch a job posting; `None` when it does not exist
    async fn get_job(&self, id: &JobId) -> Result<Option<JobPosting>>;
}
