// SQLite FeedbackStore Implementation

use crate::store_error::map_sqlx_error;
use async_trait::async_trait;
use jobboard_core::domain::{ApplicationId, Feedback, FeedbackId};
use jobboard_core::error::Result;
use jobboard_core::port::FeedbackStore;
use sqlx::SqlitePool;

pub struct SqliteFeedbackStore {
    pool: SqlitePool,
}

impl SqliteFeedbackStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackStore for SqliteFeedbackStore {
    async fn insert(&self, feedback: &Feedback) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO feedback (id, user_id, application_id, rating, comment, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&feedback.id)
        .bind(&feedback.user_id)
        .bind(&feedback.application_id)
        .bind(feedback.rating)
        .bind(&feedback.comment)
        .bind(feedback.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn find_by_id(&self, id: &FeedbackId) -> Result<Option<Feedback>> {
        let row = sqlx::query_as::<_, FeedbackRow>("SELECT * FROM feedback WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(FeedbackRow::into_feedback))
    }

    async fn list_for_application(
        &self,
        application_id: &ApplicationId,
    ) -> Result<Vec<Feedback>> {
        let rows: Vec<FeedbackRow> =
            sqlx::query_as("SELECT * FROM feedback WHERE application_id = ? ORDER BY created_at ASC")
                .bind(application_id)
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(FeedbackRow::into_feedback).collect())
    }

    async fn update(
        &self,
        id: &FeedbackId,
        rating: Option<i32>,
        comment: Option<String>,
    ) -> Result<Option<Feedback>> {
        sqlx::query(
            r#"
            UPDATE feedback
            SET rating = COALESCE(?, rating), comment = COALESCE(?, comment)
            WHERE id = ?
            "#,
        )
        .bind(rating)
        .bind(comment)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.find_by_id(id).await
    }

    async fn delete(&self, id: &FeedbackId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM feedback WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
struct FeedbackRow {
    id: String,
    user_id: String,
    application_id: String,
    rating: i32,
    comment: Option<String>,
    created_at: i64,
}

impl FeedbackRow {
    fn into_feedback(self) -> Feedback {
        Feedback {
            id: self.id,
            user_id: self.user_id,
            application_id: self.application_id,
            rating: self.rating,
            comment: self.comment,
            created_at: self.created_at,
        }
    }
}
