// User Store Port (Interface)

use crate::domain::{User, UserId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for User persistence
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user.
    ///
    /// A duplicate email surfaces as `AppError::Conflict`.
    async fn insert(&self, user: &User) -> Result<()>;

    /// Find user by ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Delete a user (applications, messages and feedback cascade)
    async fn delete(&self, id: &UserId) -> Result<()>;
}
