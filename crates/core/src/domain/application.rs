// Application Domain Model

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::job::JobId;
use super::user::UserId;

/// Application ID (UUID v4)
pub type ApplicationId = String;

/// Lifecycle status of a job application.
///
/// The five values below are the only strings that may ever be persisted.
/// Any status may follow any other, including self-transitions; the store
/// serializes concurrent writers so the last committed update wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Submitted,
    UnderReview,
    Accepted,
    Rejected,
    Withdrawn,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Submitted,
        ApplicationStatus::UnderReview,
        ApplicationStatus::Accepted,
        ApplicationStatus::Rejected,
        ApplicationStatus::Withdrawn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::UnderReview => "under_review",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Withdrawn => "withdrawn",
        }
    }

    fn expected_list() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ApplicationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submitted" => Ok(ApplicationStatus::Submitted),
            "under_review" => Ok(ApplicationStatus::UnderReview),
            "accepted" => Ok(ApplicationStatus::Accepted),
            "rejected" => Ok(ApplicationStatus::Rejected),
            "withdrawn" => Ok(ApplicationStatus::Withdrawn),
            other => Err(DomainError::UnknownStatus {
                given: other.to_string(),
                expected: Self::expected_list(),
            }),
        }
    }
}

/// Application Entity
///
/// `id`, `user_id`, `job_id` and `applied_at` are immutable after creation;
/// `status` changes only through the lifecycle engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub user_id: UserId,
    pub job_id: JobId,
    pub status: ApplicationStatus,
    pub applied_at: i64, // epoch ms
}

impl Application {
    /// Create a new Application in the `submitted` state.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique application ID (injected, not generated)
    /// * `user_id` - Applying user
    /// * `job_id` - Target job posting
    /// * `applied_at` - Creation timestamp in epoch ms (injected, not system time)
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        job_id: impl Into<String>,
        applied_at: i64,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            job_id: job_id.into(),
            status: ApplicationStatus::Submitted,
            applied_at,
        }
    }
}
