// SQLite ApplicationStore Implementation

use crate::store_error::map_sqlx_error;
use crate::SqliteApplicationTransaction;
use async_trait::async_trait;
use jobboard_core::domain::{Application, ApplicationId, ApplicationStatus};
use jobboard_core::error::{AppError, Result};
use jobboard_core::port::{
    ApplicationFilter, ApplicationStore, ApplicationStoreTransaction,
    TransactionalApplicationStore,
};
use sqlx::SqlitePool;

pub struct SqliteApplicationStore {
    pool: SqlitePool,
}

impl SqliteApplicationStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationStore for SqliteApplicationStore {
    async fn find_by_id(&self, id: &ApplicationId) -> Result<Option<Application>> {
        let row = sqlx::query_as::<_, ApplicationRow>("SELECT * FROM applications WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(ApplicationRow::into_application).transpose()
    }

    async fn list(&self, filter: &ApplicationFilter) -> Result<Vec<Application>> {
        let rows: Vec<ApplicationRow> = match (&filter.user_id, &filter.job_id) {
            (Some(user_id), Some(job_id)) => {
                sqlx::query_as("SELECT * FROM applications WHERE user_id = ? AND job_id = ?")
                    .bind(user_id)
                    .bind(job_id)
                    .fetch_all(&self.pool)
                    .await
            }
            (Some(user_id), None) => {
                sqlx::query_as("SELECT * FROM applications WHERE user_id = ?")
                    .bind(user_id)
                    .fetch_all(&self.pool)
                    .await
            }
            (None, Some(job_id)) => {
                sqlx::query_as("SELECT * FROM applications WHERE job_id = ?")
                    .bind(job_id)
                    .fetch_all(&self.pool)
                    .await
            }
            (None, None) => {
                sqlx::query_as("SELECT * FROM applications")
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(map_sqlx_error)?;

        rows.into_iter()
            .map(ApplicationRow::into_application)
            .collect()
    }
}

#[async_trait]
impl TransactionalApplicationStore for SqliteApplicationStore {
    async fn begin_transaction(&self) -> Result<Box<dyn ApplicationStoreTransaction>> {
        let tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        Ok(Box::new(SqliteApplicationTransaction::new(tx)))
    }
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct ApplicationRow {
    id: String,
    user_id: String,
    job_id: String,
    status: String,
    applied_at: i64,
}

impl ApplicationRow {
    /// Fallible conversion: a status string outside the closed enum means
    /// the store was written around the engine and is treated as corruption
    pub(crate) fn into_application(self) -> Result<Application> {
        let status: ApplicationStatus = self.status.parse().map_err(|_| {
            AppError::Database(format!(
                "Corrupt status '{}' on application {}",
                self.status, self.id
            ))
        })?;

        Ok(Application {
            id: self.id,
            user_id: self.user_id,
            job_id: self.job_id,
            status,
            applied_at: self.applied_at,
        })
    }
}
