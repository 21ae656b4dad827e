// Job Posting Domain Model

use serde::{Deserialize, Serialize};

use super::user::UserId;

/// Job Posting ID (UUID v4)
pub type JobId = String;

/// Job Posting Entity
///
/// `deadline` is optional; a posting with no deadline accepts applications
/// indefinitely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub requirements: Option<String>,
    pub deadline: Option<i64>, // epoch ms
    pub posted_at: i64,        // epoch ms
    pub admin_id: UserId,
}

impl JobPosting {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        admin_id: impl Into<String>,
        posted_at: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            location: None,
            requirements: None,
            deadline: None,
            posted_at,
            admin_id: admin_id.into(),
        }
    }

    /// Whether the posting's deadline (if any) is strictly before `now_millis`.
    pub fn is_expired(&self, now_millis: i64) -> bool {
        matches!(self.deadline, Some(deadline) if deadline < now_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_deadline_never_expires() {
        let job = JobPosting::new("job-1", "Title", "Desc", "admin-1", 1000);
        assert!(!job.is_expired(i64::MAX));
    }

    #[test]
    fn test_deadline_boundary() {
        let mut job = JobPosting::new("job-1", "Title", "Desc", "admin-1", 1000);
        job.deadline = Some(5000);
        assert!(!job.is_expired(5000)); // strictly before, not at
        assert!(job.is_expired(5001));
        assert!(!job.is_expired(4999));
    }
}
