// Job View Counter Domain Model

use serde::{Deserialize, Serialize};

use super::job::JobId;

/// Daily view counter for a job posting.
///
/// One row per (job_id, view_date); `view_date` is a `YYYY-MM-DD` string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobView {
    pub job_id: JobId,
    pub view_date: String,
    pub view_count: i64,
}
