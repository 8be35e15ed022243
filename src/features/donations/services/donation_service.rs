use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::donations::models::{Donation, NewDonation};
use crate::features::summaries::{SummaryDelta, SummaryService};
use crate::shared::types::{Pagination, PaginationQuery};

/// Summary category fed by completed donations
const DONATION_SUMMARY_CATEGORY: &str = "donations";

const DONATION_COLUMNS: &str = "id, donor_name, donor_email, amount, currency, recurring, \
     status, stripe_session_id, created_by, created_at, updated_at";

/// Service for donation records
pub struct DonationService {
    pool: PgPool,
}

impl DonationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a pending donation before the checkout session is opened
    pub async fn create(&self, data: &NewDonation, actor: i64) -> Result<Donation> {
        let sql = format!(
            "INSERT INTO donations (donor_name, donor_email, amount, currency, recurring, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {DONATION_COLUMNS}"
        );
        let donation = sqlx::query_as::<_, Donation>(&sql)
            .bind(data.donor_name.as_deref())
            .bind(data.donor_email.as_deref())
            .bind(data.amount)
            .bind(data.currency.as_str())
            .bind(data.recurring)
            .bind(actor)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create donation: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Donation created: id={}, amount={} {}",
            donation.id,
            donation.amount,
            donation.currency
        );

        Ok(donation)
    }

    /// Attach the provider session id once the checkout session exists
    pub async fn set_session(&self, id: i64, session_id: &str) -> Result<()> {
        sqlx::query(
            "UPDATE donations SET stripe_session_id = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(session_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to attach session to donation {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(())
    }

    /// List donations with pagination, newest first
    pub async fn list(&self, query: &PaginationQuery) -> Result<(Vec<Donation>, Pagination)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM donations")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count donations: {:?}", e);
                AppError::Database(e)
            })?;

        let sql = format!(
            "SELECT {DONATION_COLUMNS} FROM donations ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        let donations = sqlx::query_as::<_, Donation>(&sql)
            .bind(query.limit())
            .bind(query.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list donations: {:?}", e);
                AppError::Database(e)
            })?;

        Ok((
            donations,
            Pagination::new(total, query.page(), query.limit()),
        ))
    }

    /// Get donation by ID
    pub async fn find_one(&self, id: i64) -> Result<Donation> {
        let sql = format!("SELECT {DONATION_COLUMNS} FROM donations WHERE id = $1");
        let donation = sqlx::query_as::<_, Donation>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get donation: {:?}", e);
                AppError::Database(e)
            })?;

        donation.ok_or_else(|| AppError::NotFound(format!("Donation {} not found", id)))
    }

    /// Settle a pending donation after the provider confirms payment.
    ///
    /// The status flip and the summary increment share one transaction.
    /// Returns None when no pending donation matches the session, which is
    /// how webhook redelivery stays a no-op.
    pub async fn complete_by_session(&self, session_id: &str) -> Result<Option<Donation>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let sql = format!(
            "UPDATE donations SET status = 'completed', updated_at = NOW() \
             WHERE stripe_session_id = $1 AND status = 'pending' RETURNING {DONATION_COLUMNS}"
        );
        let donation = sqlx::query_as::<_, Donation>(&sql)
            .bind(session_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to complete donation: {:?}", e);
                AppError::Database(e)
            })?;

        let Some(donation) = donation else {
            return Ok(None);
        };

        SummaryService::apply_delta(
            &mut tx,
            &SummaryDelta {
                category: DONATION_SUMMARY_CATEGORY.to_string(),
                amount: donation.amount,
            },
        )
        .await?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit donation completion: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Donation completed: id={}", donation.id);

        Ok(Some(donation))
    }

    /// Mark a pending donation failed (expired/abandoned checkout)
    pub async fn fail_by_session(&self, session_id: &str) -> Result<()> {
        let updated = sqlx::query(
            "UPDATE donations SET status = 'failed', updated_at = NOW() \
             WHERE stripe_session_id = $1 AND status = 'pending'",
        )
        .bind(session_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to mark donation failed: {:?}", e);
            AppError::Database(e)
        })?;

        if updated.rows_affected() == 0 {
            tracing::warn!("No pending donation for expired session {}", session_id);
        }

        Ok(())
    }
}
