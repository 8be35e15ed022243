use sqlx::{PgConnection, PgPool};

use crate::core::error::{AppError, Result};
use crate::features::summaries::models::{Summary, SummaryDelta};

/// Service for category summary rows
pub struct SummaryService {
    pool: PgPool,
}

impl SummaryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all summary rows
    pub async fn list(&self) -> Result<Vec<Summary>> {
        let summaries = sqlx::query_as::<_, Summary>(
            "SELECT id, category, total_amount, entry_count, updated_at \
             FROM summaries ORDER BY category",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list summaries: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(summaries)
    }

    /// Apply an increment on the caller's open transaction.
    ///
    /// The error is propagated untouched: the caller must not commit after a
    /// failed delta, so the originating write rolls back with it.
    pub async fn apply_delta(conn: &mut PgConnection, delta: &SummaryDelta) -> Result<()> {
        sqlx::query(
            "INSERT INTO summaries (category, total_amount, entry_count) \
             VALUES ($1, $2, 1) \
             ON CONFLICT (category) DO UPDATE SET \
                 total_amount = summaries.total_amount + EXCLUDED.total_amount, \
                 entry_count = summaries.entry_count + 1, \
                 updated_at = NOW()",
        )
        .bind(&delta.category)
        .bind(delta.amount)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to apply summary delta for '{}': {:?}",
                delta.category,
                e
            );
            AppError::Database(e)
        })?;

        tracing::debug!(
            "Summary '{}' incremented by {}",
            delta.category,
            delta.amount
        );

        Ok(())
    }
}
