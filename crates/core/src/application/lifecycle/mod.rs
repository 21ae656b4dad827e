// Application Lifecycle Service - creation, status transitions, deletion

pub mod apply;
pub mod update_status;


pub use apply::{ApplyOutcome, ApplyRequest};
pub use update_status::UpdateStatusRequest;

use crate::domain::{Application, ApplicationId};
use crate::error::{AppError, Result};
use crate::port::{
    ApplicationFilter, ApplicationStore, IdProvider, JobDirectory, TimeProvider,
    TransactionalApplicationStore,
};
use std::sync::Arc;
use tracing::info;

/// Lifecycle engine for job applications.
///
/// Every mutating operation runs inside a single store transaction;
/// `update_status` and `delete` additionally hold an exclusive lock on the
/// target row so concurrent mutations of one application serialize.
pub struct ApplicationLifecycleService {
    store: Arc<dyn TransactionalApplicationStore>,
    reader: Arc<dyn ApplicationStore>,
    jobs: Arc<dyn JobDirectory>,
    id_provider: Arc<dyn IdProvider>,
    time_provider: Arc<dyn TimeProvider>,
}

impl ApplicationLifecycleService {
    pub fn new(
        store: Arc<dyn TransactionalApplicationStore>,
        reader: Arc<dyn ApplicationStore>,
        jobs: Arc<dyn JobDirectory>,
        id_provider: Arc<dyn IdProvider>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            store,
            reader,
            jobs,
            id_provider,
            time_provider,
        }
    }

    /// Submit an application for a job
    pub async fn apply(&self, req: ApplyRequest) -> Result<ApplyOutcome> {
        apply::execute(
            self.store.as_ref(),
            self.jobs.as_ref(),
            self.id_provider.as_ref(),
            self.time_provider.as_ref(),
            req,
        )
        .await
    }

    /// Fetch an application by ID
    pub async fn get(&self, id: &ApplicationId) -> Result<Application> {
        self.reader
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Application {} not found", id)))
    }

    /// Change an application's status
    pub async fn update_status(&self, req: UpdateStatusRequest) -> Result<Application> {
        update_status::execute(self.store.as_ref(), req).await
    }

    /// Delete an application, returning the deleted snapshot
    pub async fn delete(&self, id: &ApplicationId) -> Result<Application> {
        let mut tx = self.store.begin_transaction().await?;

        let application = tx
            .lock_for_update(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Application {} not found", id)))?;

        tx.delete(id).await?;
        tx.commit().await?;

        info!(application_id = %application.id, "Application deleted");
        Ok(application)
    }

    /// List applications matching the filter
    pub async fn list(&self, filter: &ApplicationFilter) -> Result<Vec<Application>> {
        self.reader.list(filter).await
    }
}
