// SQLite FaqStore Implementation

use crate::store_error::map_sqlx_error;
use async_trait::async_trait;
use jobboard_core::domain::{Faq, FaqId};
use jobboard_core::error::Result;
use jobboard_core::port::FaqStore;
use sqlx::SqlitePool;

pub struct SqliteFaqStore {
    pool: SqlitePool,
}

impl SqliteFaqStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FaqStore for SqliteFaqStore {
    async fn insert(&self, faq: &Faq) -> Result<()> {
        sqlx::query("INSERT INTO faqs (id, question, answer, category) VALUES (?, ?, ?, ?)")
            .bind(&faq.id)
            .bind(&faq.question)
            .bind(&faq.answer)
            .bind(&faq.category)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn find_by_id(&self, id: &FaqId) -> Result<Option<Faq>> {
        let row = sqlx::query_as::<_, FaqRow>("SELECT * FROM faqs WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(FaqRow::into_faq))
    }

    async fn list(&self) -> Result<Vec<Faq>> {
        let rows: Vec<FaqRow> = sqlx::query_as("SELECT * FROM faqs")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(FaqRow::into_faq).collect())
    }

    async fn update(
        &self,
        id: &FaqId,
        question: Option<String>,
        answer: Option<String>,
        category: Option<String>,
    ) -> Result<Option<Faq>> {
        sqlx::query(
            r#"
            UPDATE faqs
            SET question = COALESCE(?, question),
                answer = COALESCE(?, answer),
                category = COALESCE(?, category)
            WHERE id = ?
            "#,
        )
        .bind(question)
        .bind(answer)
        .bind(category)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        self.find_by_id(id).await
    }

    async fn delete(&self, id: &FaqId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
struct FaqRow {
    id: String,
    question: String,
    answer: String,
    category: Option<String>,
}

impl FaqRow {
    fn into_faq(self) -> Faq {
        Faq {
            id: self.id,
            question: self.question,
            answer: self.answer,
            category: self.category,
        }
    }
}
