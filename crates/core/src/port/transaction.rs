// Transaction port for atomic application mutations

use crate::domain::{Application, ApplicationId, ApplicationStatus, JobId, UserId};
use crate::error::Result;
use async_trait::async_trait;

/// Transaction trait for atomic multi-step operations.
///
/// Implementations must roll back when the transaction is dropped without
/// a commit, so early `?` returns leave no partial writes behind.
#[async_trait]
pub trait Transaction: Send {
    /// Commit the transaction
    async fn commit(self: Box<Self>) -> Result<()>;

    /// Rollback the transaction
    async fn rollback(self: Box<Self>) -> Result<()>;
}

/// Transactional ApplicationStore operations
#[async_trait]
pub trait TransactionalApplicationStore: Send + Sync {
    /// Begin a new transaction
    async fn begin_transaction(&self) -> Result<Box<dyn ApplicationStoreTransaction>>;
}

/// ApplicationStore operations within a transaction
#[async_trait]
pub trait ApplicationStoreTransaction: Transaction {
    /// Find the application for a (user, job) pair, claiming the store's
    /// write lock first so concurrent check-then-insert sequences serialize
    async fn find_for_pair(
        &mut self,
        user_id: &UserId,
        job_id: &JobId,
    ) -> Result<Option<Application>>;

    /// Insert a new application.
    ///
    /// A UNIQUE(user_id, job_id) violation surfaces as `AppError::Conflict`.
    async fn insert(&mut self, application: &Application) -> Result<()>;

    /// Read the application under an exclusive row lock held until the
    /// transaction ends; `None` when no row matches
    async fn lock_for_update(&mut self, id: &ApplicationId) -> Result<Option<Application>>;

    /// Persist a status change for a locked row
    async fn persist_status(
        &mut self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<()>;

    /// Delete a locked row
    async fn delete(&mut self, id: &ApplicationId) -> Result<()>;
}
