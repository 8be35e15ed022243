use std::sync::Arc;

use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::newsletter::dtos::{SubscribeDto, SubscriberResponseDto};
use crate::features::newsletter::models::NewsletterSubscriber;
use crate::modules::mailer::{templates, Mailer, OutgoingEmail};

/// Service for newsletter subscriptions
pub struct NewsletterService {
    pool: PgPool,
    mailer: Option<Arc<dyn Mailer>>,
}

impl NewsletterService {
    pub fn new(pool: PgPool, mailer: Option<Arc<dyn Mailer>>) -> Self {
        Self { pool, mailer }
    }

    /// Subscribe an email. Re-subscribing an inactive address reactivates
    /// it; an already active one is a conflict.
    pub async fn subscribe(&self, dto: SubscribeDto) -> Result<SubscriberResponseDto> {
        let existing = sqlx::query_as::<_, NewsletterSubscriber>(
            "SELECT id, email, name, is_active, created_at, updated_at \
             FROM newsletter_subscribers WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up subscriber: {:?}", e);
            AppError::Database(e)
        })?;

        let subscriber = match existing {
            Some(subscriber) if subscriber.is_active => {
                return Err(AppError::Conflict(format!(
                    "{} is already subscribed",
                    subscriber.email
                )));
            }
            Some(_) => sqlx::query_as::<_, NewsletterSubscriber>(
                "UPDATE newsletter_subscribers \
                 SET is_active = TRUE, name = COALESCE($2, name), updated_at = NOW() \
                 WHERE email = $1 \
                 RETURNING id, email, name, is_active, created_at, updated_at",
            )
            .bind(&dto.email)
            .bind(dto.name.as_deref())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to reactivate subscriber: {:?}", e);
                AppError::Database(e)
            })?,
            None => sqlx::query_as::<_, NewsletterSubscriber>(
                "INSERT INTO newsletter_subscribers (email, name) VALUES ($1, $2) \
                 RETURNING id, email, name, is_active, created_at, updated_at",
            )
            .bind(&dto.email)
            .bind(dto.name.as_deref())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert subscriber: {:?}", e);
                AppError::Database(e)
            })?,
        };

        tracing::info!("Newsletter subscriber registered: id={}", subscriber.id);

        self.send_welcome(&subscriber);

        Ok(subscriber.into())
    }

    /// Deactivate a subscription. Unknown or already inactive emails are
    /// not-found.
    pub async fn unsubscribe(&self, email: &str) -> Result<()> {
        let updated = sqlx::query(
            "UPDATE newsletter_subscribers SET is_active = FALSE, updated_at = NOW() \
             WHERE email = $1 AND is_active = TRUE",
        )
        .bind(email)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to unsubscribe: {:?}", e);
            AppError::Database(e)
        })?;

        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "No active subscription for {}",
                email
            )));
        }

        tracing::info!("Newsletter subscriber deactivated: {}", email);

        Ok(())
    }

    fn send_welcome(&self, subscriber: &NewsletterSubscriber) {
        let Some(mailer) = self.mailer.clone() else {
            return;
        };
        let to = subscriber.email.clone();
        let name = subscriber.name.clone();

        tokio::spawn(async move {
            let html = match templates::newsletter_welcome(name.as_deref()) {
                Ok(html) => html,
                Err(e) => {
                    tracing::warn!("Failed to render welcome email: {}", e);
                    return;
                }
            };

            if let Err(e) = mailer
                .send(OutgoingEmail {
                    to,
                    subject: "Welcome to the Amanah newsletter".to_string(),
                    html_body: html,
                })
                .await
            {
                tracing::warn!("Failed to send welcome email: {}", e);
            }
        });
    }
}
