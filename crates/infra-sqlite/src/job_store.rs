// SQLite JobStore Implementation (also the engine's JobDirectory)

use crate::store_error::map_sqlx_error;
use async_trait::async_trait;
use jobboard_core::domain::{JobId, JobPosting};
use jobboard_core::error::Result;
use jobboard_core::port::{JobDirectory, JobStore};
use sqlx::SqlitePool;

pub struct SqliteJobStore {
    pool: SqlitePool,
}

impl SqliteJobStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for SqliteJobStore {
    async fn insert(&self, job: &JobPosting) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO jobs (id, title, description, location, requirements, deadline, posted_at, admin_id)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&job.id)
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.location)
        .bind(&job.requirements)
        .bind(job.deadline)
        .bind(job.posted_at)
        .bind(&job.admin_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn find_by_id(&self, id: &JobId) -> Result<Option<JobPosting>> {
        let row = sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(JobRow::into_job))
    }

    async fn list(&self) -> Result<Vec<JobPosting>> {
        let rows: Vec<JobRow> = sqlx::query_as("SELECT * FROM jobs ORDER BY posted_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(JobRow::into_job).collect())
    }

    async fn update(&self, job: &JobPosting) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE jobs
            SET title = ?, description = ?, location = ?, requirements = ?, deadline = ?
            WHERE id = ?
            "#,
        )
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.location)
        .bind(&job.requirements)
        .bind(job.deadline)
        .bind(&job.id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete(&self, id: &JobId) -> Result<()> {
        sqlx::query("DELETE FROM jobs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}

#[async_trait]
impl JobDirectory for SqliteJobStore {
    async fn get_job(&self, id: &JobId) -> Result<Option<JobPosting>> {
        JobStore::find_by_id(self, id).await
    }
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
struct JobRow {
    id: String,
    title: String,
    description: String,
    location: Option<String>,
    requirements: Option<String>,
    deadline: Option<i64>,
    posted_at: i64,
    admin_id: String,
}

impl JobRow {
    fn into_job(self) -> JobPosting {
        JobPosting {
            id: self.id,
            title: self.title,
            description: self.description,
            location: self.location,
            requirements: self.requirements,
            deadline: self.deadline,
            posted_at: self.posted_at,
            admin_id: self.admin_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_pool, run_migrations, SqliteUserStore};
    use jobboard_core::domain::User;
    use jobboard_core::port::UserStore;

    async fn setup_test_db() -> SqlitePool {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();

        let users = SqliteUserStore::new(pool.clone());
        users
            .insert(&User::new("admin-1", "admin@example.com", 1000))
            .await
            .unwrap();
        pool
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let pool = setup_test_db().await;
        let store = SqliteJobStore::new(pool);

        let mut job = JobPosting::new("job-1", "Backend Engineer", "Rust services", "admin-1", 1000);
        job.deadline = Some(999_999);
        store.insert(&job).await.unwrap();

        let found = store.find_by_id(&"job-1".to_string()).await.unwrap().unwrap();
        assert_eq!(found.title, "Backend Engineer");
        assert_eq!(found.deadline, Some(999_999));
    }

    #[tokio::test]
    async fn test_update_and_list() {
        let pool = setup_test_db().await;
        let store = SqliteJobStore::new(pool);

        let mut job = JobPosting::new("job-1", "Backend Engineer", "Rust services", "admin-1", 1000);
        store.insert(&job).await.unwrap();

        job.location = Some("Remote".to_string());
        job.deadline = Some(5000);
        store.update(&job).await.unwrap();

        let jobs = store.list().await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].location.as_deref(), Some("Remote"));
        assert_eq!(jobs[0].deadline, Some(5000));
    }

    #[tokio::test]
    async fn test_directory_lookup_missing_job() {
        let pool = setup_test_db().await;
        let store = SqliteJobStore::new(pool);

        let found = store.get_job(&"no-such-job".to_string()).await.unwrap();
        assert!(found.is_none());
    }
}
