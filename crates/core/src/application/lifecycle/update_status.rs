// Update Status Use Case - serialized status mutation

use crate::domain::{Application, ApplicationStatus};
use crate::error::{AppError, Result};
use crate::port::TransactionalApplicationStore;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Status update request; `status` must be one of the five enum strings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub application_id: String,
    pub status: String,
}

pub(crate) fn validate_request(req: &UpdateStatusRequest) -> Result<ApplicationStatus> {
    if req.application_id.trim().is_empty() {
        return Err(AppError::Validation(
            "application_id is required".to_string(),
        ));
    }
    let status: ApplicationStatus = req.status.parse()?;
    Ok(status)
}

/// Execute the status update use case.
///
/// The row is read under an exclusive lock held until commit, so N
/// concurrent updates to one application execute strictly one at a time.
/// Each serialized caller succeeds independently; the last commit
/// determines the final status.
pub async fn execute(
    store: &dyn TransactionalApplicationStore,
    req: UpdateStatusRequest,
) -> Result<Application> {
    let status = validate_request(&req)?;

    let mut tx = store.begin_transaction().await?;

    let mut application = tx.lock_for_update(&req.application_id).await?.ok_or_else(|| {
        AppError::NotFound(format!("Application {} not found", req.application_id))
    })?;

    let previous = application.status;
    application.status = status;
    tx.persist_status(&application.id, application.status).await?;
    tx.commit().await?;

    info!(
        application_id = %application.id,
        from = %previous,
        to = %application.status,
        "Application status updated"
    );
    Ok(application)
}
