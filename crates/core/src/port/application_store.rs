// Application Store Port (Interface) - read side

use crate::domain::{Application, ApplicationId, JobId, UserId};
use crate::error::Result;
use async_trait::async_trait;

/// Equality filter for listing applications.
///
/// Both fields unset returns everything; set fields are AND-ed.
#[derive(Debug, Clone, Default)]
pub struct ApplicationFilter {
    pub user_id: Option<UserId>,
    pub job_id: Option<JobId>,
}

impl ApplicationFilter {
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            job_id: None,
        }
    }

    pub fn for_job(job_id: impl Into<String>) -> Self {
        Self {
            user_id: None,
            job_id: Some(job_id.into()),
        }
    }
}

/// Repository interface for Application reads
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// Find application by ID
    async fn find_by_id(&self, id: &ApplicationId) -> Result<Option<Application>>;

    /// List applications matching the filter (no ordering guarantee)
    async fn list(&self, filter: &ApplicationFilter) -> Result<Vec<Application>>;
}
