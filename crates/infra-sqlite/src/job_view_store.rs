// SQLite JobViewStore Implementation

use crate::store_error::map_sqlx_error;
use async_trait::async_trait;
use jobboard_core::domain::{JobId, JobView};
use jobboard_core::error::{AppError, Result};
use jobboard_core::port::{JobViewStore, TimeProvider};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct SqliteJobViewStore {
    pool: SqlitePool,
    time_provider: Arc<dyn TimeProvider>,
}

impl SqliteJobViewStore {
    pub fn new(pool: SqlitePool, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            pool,
            time_provider,
        }
    }

    fn today(&self) -> Result<String> {
        let now = self.time_provider.now_millis();
        chrono::DateTime::from_timestamp_millis(now)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .ok_or_else(|| AppError::Database(format!("Timestamp out of range: {}", now)))
    }
}

#[async_trait]
impl JobViewStore for SqliteJobViewStore {
    async fn record_view(&self, job_id: &JobId) -> Result<JobView> {
        let view_date = self.today()?;

        // Single-statement upsert; concurrent viewers never lose increments
        sqlx::query(
            r#"
            INSERT INTO job_views (job_id, view_date, view_count)
            VALUES (?, ?, 1)
            ON CONFLICT(job_id, view_date) DO UPDATE SET view_count = view_count + 1
            "#,
        )
        .bind(job_id)
        .bind(&view_date)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let count: i64 = sqlx::query_scalar(
            "SELECT view_count FROM job_views WHERE job_id = ? AND view_date = ?",
        )
        .bind(job_id)
        .bind(&view_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(JobView {
            job_id: job_id.clone(),
            view_date,
            view_count: count,
        })
    }

    async fn monthly_views(&self, year: i32, month: u32) -> Result<Vec<(JobId, i64)>> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT job_id, SUM(view_count)
            FROM job_views
            WHERE strftime('%Y', view_date) = ? AND strftime('%m', view_date) = ?
            GROUP BY job_id
            "#,
        )
        .bind(format!("{:04}", year))
        .bind(format!("{:02}", month))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_pool, run_migrations, SqliteJobStore, SqliteUserStore};
    use jobboard_core::domain::{JobPosting, User};
    use jobboard_core::port::{JobStore, UserStore};

    /// Fixed-instant provider so view dates are deterministic
    struct FixedTimeProvider(i64);

    impl TimeProvider for FixedTimeProvider {
        fn now_millis(&self) -> i64 {
            self.0
        }
    }

    // 2024-03-15T12:00:00Z
    const MID_MARCH: i64 = 1_710_504_000_000;

    async fn setup_test_db() -> SqlitePool {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();

        let users = SqliteUserStore::new(pool.clone());
        users
            .insert(&User::new("admin-1", "admin@example.com", 1000))
            .await
            .unwrap();

        let jobs = SqliteJobStore::new(pool.clone());
        jobs.insert(&JobPosting::new("job-1", "Title", "Desc", "admin-1", 1000))
            .await
            .unwrap();
        pool
    }

    #[tokio::test]
    async fn test_record_view_increments() {
        let pool = setup_test_db().await;
        let store = SqliteJobViewStore::new(pool, Arc::new(FixedTimeProvider(MID_MARCH)));

        let first = store.record_view(&"job-1".to_string()).await.unwrap();
        assert_eq!(first.view_count, 1);
        assert_eq!(first.view_date, "2024-03-15");

        let second = store.record_view(&"job-1".to_string()).await.unwrap();
        assert_eq!(second.view_count, 2);
    }

    #[tokio::test]
    async fn test_monthly_views_aggregates() {
        let pool = setup_test_db().await;
        let store = SqliteJobViewStore::new(pool, Arc::new(FixedTimeProvider(MID_MARCH)));

        for _ in 0..3 {
            store.record_view(&"job-1".to_string()).await.unwrap();
        }

        let march = store.monthly_views(2024, 3).await.unwrap();
        assert_eq!(march, vec![("job-1".to_string(), 3)]);

        let april = store.monthly_views(2024, 4).await.unwrap();
        assert!(april.is_empty());
    }
}
