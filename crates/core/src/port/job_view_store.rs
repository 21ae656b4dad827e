// Job View Store Port (Interface)

use crate::domain::{JobId, JobView};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for daily job view counters
#[async_trait]
pub trait JobViewStore: Send + Sync {
    /// Increment today's view counter for a job (atomic upsert)
    async fn record_view(&self, job_id: &JobId) -> Result<JobView>;

    /// Total views per job for a given month
    async fn monthly_views(&self, year: i32, month: u32) -> Result<Vec<(JobId, i64)>>;
}
