// SQLite Transaction Implementation
//
// SQLite has no SELECT ... FOR UPDATE. Each locking read issues a no-op
// UPDATE on the target rows first, which promotes this transaction to the
// database's single writer before anything is read. Mutating transactions
// therefore never upgrade from reader to writer mid-flight (which WAL mode
// would refuse with SQLITE_BUSY_SNAPSHOT); they queue on the write lock up
// to the pool's busy timeout instead.

use crate::application_store::ApplicationRow;
use crate::store_error::map_sqlx_error;
use async_trait::async_trait;
use jobboard_core::domain::{Application, ApplicationId, ApplicationStatus, JobId, UserId};
use jobboard_core::error::Result;
use jobboard_core::port::{ApplicationStoreTransaction, Transaction};
use sqlx::{Sqlite, Transaction as SqlxTransaction};

pub struct SqliteApplicationTransaction {
    tx: SqlxTransaction<'static, Sqlite>,
}

impl SqliteApplicationTransaction {
    pub fn new(tx: SqlxTransaction<'static, Sqlite>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl Transaction for SqliteApplicationTransaction {
    async fn commit(mut self: Box<Self>) -> Result<()> {
        self.tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn rollback(mut self: Box<Self>) -> Result<()> {
        self.tx.rollback().await.map_err(map_sqlx_error)?;
        Ok(())
    }
}

#[async_trait]
impl ApplicationStoreTransaction for SqliteApplicationTransaction {
    async fn find_for_pair(
        &mut self,
        user_id: &UserId,
        job_id: &JobId,
    ) -> Result<Option<Application>> {
        // Write-lock claim; also tells us whether the pair exists
        sqlx::query("UPDATE applications SET id = id WHERE user_id = ? AND job_id = ?")
            .bind(user_id)
            .bind(job_id)
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        let row = sqlx::query_as::<_, ApplicationRow>(
            "SELECT * FROM applications WHERE user_id = ? AND job_id = ?",
        )
        .bind(user_id)
        .bind(job_id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;

        row.map(ApplicationRow::into_application).transpose()
    }

    async fn insert(&mut self, application: &Application) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO applications (id, user_id, job_id, status, applied_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&application.id)
        .bind(&application.user_id)
        .bind(&application.job_id)
        .bind(application.status.as_str())
        .bind(application.applied_at)
        .execute(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn lock_for_update(&mut self, id: &ApplicationId) -> Result<Option<Application>> {
        // Write-lock claim on the row; zero rows touched means no row exists
        let claimed = sqlx::query("UPDATE applications SET id = id WHERE id = ?")
            .bind(id)
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        if claimed.rows_affected() == 0 {
            return Ok(None);
        }

        let row = sqlx::query_as::<_, ApplicationRow>("SELECT * FROM applications WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        row.map(ApplicationRow::into_application).transpose()
    }

    async fn persist_status(
        &mut self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<()> {
        sqlx::query("UPDATE applications SET status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(id)
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete(&mut self, id: &ApplicationId) -> Result<()> {
        sqlx::query("DELETE FROM applications WHERE id = ?")
            .bind(id)
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}
