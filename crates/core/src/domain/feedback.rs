// Feedback Domain Model

use serde::{Deserialize, Serialize};

use super::application::ApplicationId;
use super::error::DomainError;
use super::user::UserId;

/// Feedback ID (UUID v4)
pub type FeedbackId = String;

/// Feedback left by a user on one of their applications
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: FeedbackId,
    pub user_id: UserId,
    pub application_id: ApplicationId,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: i64, // epoch ms
}

impl Feedback {
    /// Create feedback; `rating` must be within 1..=5.
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        application_id: impl Into<String>,
        rating: i32,
        comment: Option<String>,
        created_at: i64,
    ) -> Result<Self, DomainError> {
        if !(1..=5).contains(&rating) {
            return Err(DomainError::InvalidRating(rating));
        }
        Ok(Self {
            id: id.into(),
            user_id: user_id.into(),
            application_id: application_id.into(),
            rating,
            comment,
            created_at,
        })
    }
}
