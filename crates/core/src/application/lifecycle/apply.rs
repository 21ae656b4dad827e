// Apply Use Case - submit an application for a job

use crate::domain::Application;
use crate::error::{AppError, Result};
use crate::port::{IdProvider, JobDirectory, TimeProvider, TransactionalApplicationStore};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Apply request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyRequest {
    pub user_id: String,
    pub job_id: String,
}

/// Outcome of an apply call.
///
/// `AlreadyApplied` is a recognized result, not a failure: the (user, job)
/// pair already has an application and the caller decides whether to treat
/// that as an idempotent no-op or reject it.
#[derive(Debug, Clone)]
pub enum ApplyOutcome {
    Created(Application),
    AlreadyApplied,
}

pub(crate) fn validate_request(req: &ApplyRequest) -> Result<()> {
    if req.user_id.trim().is_empty() {
        return Err(AppError::Validation("user_id is required".to_string()));
    }
    if req.job_id.trim().is_empty() {
        return Err(AppError::Validation("job_id is required".to_string()));
    }
    Ok(())
}

/// Execute the apply use case (with transaction for atomicity)
///
/// The job is resolved before the transaction opens; applications cascade
/// with their job, so a missing job also means no duplicate can exist. A
/// duplicate pair takes precedence over an expired deadline. The write-lock
/// claim inside `find_for_pair` serializes the check-then-insert sequence,
/// and UNIQUE(user_id, job_id) backstops it anyway: a conflicting insert is
/// reported as `AlreadyApplied`.
pub async fn execute(
    store: &dyn TransactionalApplicationStore,
    jobs: &dyn JobDirectory,
    id_provider: &dyn IdProvider,
    time_provider: &dyn TimeProvider,
    req: ApplyRequest,
) -> Result<ApplyOutcome> {
    validate_request(&req)?;

    let job = jobs
        .get_job(&req.job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", req.job_id)))?;

    let mut tx = store.begin_transaction().await?;

    // Duplicate check (within transaction, under the write lock)
    if let Some(existing) = tx.find_for_pair(&req.user_id, &req.job_id).await? {
        tx.rollback().await?;
        debug!(
            user_id = %req.user_id,
            job_id = %req.job_id,
            application_id = %existing.id,
            "Duplicate application attempt"
        );
        return Ok(ApplyOutcome::AlreadyApplied);
    }

    let now = time_provider.now_millis();
    if job.is_expired(now) {
        return Err(AppError::InvalidState(format!(
            "Job {} deadline has passed",
            job.id
        )));
    }

    let application = Application::new(id_provider.generate_id(), req.user_id, req.job_id, now);

    match tx.insert(&application).await {
        Ok(()) => {
            tx.commit().await?;
            info!(
                application_id = %application.id,
                user_id = %application.user_id,
                job_id = %application.job_id,
                "Application created"
            );
            Ok(ApplyOutcome::Created(application))
        }
        // Lost the race to a concurrent apply for the same pair
        Err(AppError::Conflict(_)) => {
            tx.rollback().await?;
            Ok(ApplyOutcome::AlreadyApplied)
        }
        Err(e) => Err(e),
    }
}
