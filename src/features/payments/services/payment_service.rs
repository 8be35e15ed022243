use std::sync::Arc;

use chrono::Utc;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::core::config::StripeConfig;
use crate::core::error::{AppError, Result};
use crate::features::donations::models::{Donation, NewDonation};
use crate::features::donations::services::DonationService;
use crate::features::payments::clients::{CheckoutSessionParams, StripeClient};
use crate::features::payments::dtos::{CheckoutResponseDto, CreateCheckoutDto};
use crate::features::payments::webhook::{self, WebhookEvent};
use crate::modules::mailer::{templates, Mailer, OutgoingEmail};

/// Stripe rejects charges below 50 minor units in any currency
pub const MINIMUM_CHARGE_MINOR_UNITS: i64 = 50;

/// Currencies Stripe treats as zero-decimal: amounts are already in the
/// smallest unit.
const ZERO_DECIMAL_CURRENCIES: &[&str] = &[
    "bif", "clp", "djf", "gnf", "jpy", "kmf", "krw", "mga", "pyg", "rwf", "ugx", "vnd", "vuv",
    "xaf", "xof", "xpf",
];

/// Convert a decimal major-unit amount to the provider's minor unit.
///
/// Sub-minor-unit precision (e.g. 10.005 usd) is a validation error rather
/// than a silent rounding.
pub fn minor_units(amount: Decimal, currency: &str) -> Result<i64> {
    let exponent: u32 = if ZERO_DECIMAL_CURRENCIES.contains(&currency) {
        0
    } else {
        2
    };

    let scaled = amount * Decimal::from(10i64.pow(exponent));
    if !scaled.fract().is_zero() {
        return Err(AppError::Validation(format!(
            "Amount {} has sub-unit precision for currency {}",
            amount, currency
        )));
    }

    scaled
        .to_i64()
        .ok_or_else(|| AppError::Validation(format!("Amount {} is out of range", amount)))
}

/// Service wrapping checkout-session creation and webhook handling
pub struct PaymentService {
    stripe: Arc<StripeClient>,
    donations: Arc<DonationService>,
    config: StripeConfig,
    mailer: Option<Arc<dyn Mailer>>,
}

impl PaymentService {
    pub fn new(
        stripe: Arc<StripeClient>,
        donations: Arc<DonationService>,
        config: StripeConfig,
        mailer: Option<Arc<dyn Mailer>>,
    ) -> Self {
        Self {
            stripe,
            donations,
            config,
            mailer,
        }
    }

    /// Open a checkout session for a new donation
    pub async fn create_checkout(
        &self,
        dto: CreateCheckoutDto,
        actor: i64,
    ) -> Result<CheckoutResponseDto> {
        let amount_minor = minor_units(dto.amount, &dto.currency)?;
        if amount_minor < MINIMUM_CHARGE_MINOR_UNITS {
            return Err(AppError::Validation(format!(
                "Amount is below the provider minimum of {} minor units",
                MINIMUM_CHARGE_MINOR_UNITS
            )));
        }

        let donation = self
            .donations
            .create(
                &NewDonation {
                    donor_name: dto.donor_name,
                    donor_email: dto.donor_email,
                    amount: dto.amount,
                    currency: dto.currency.clone(),
                    recurring: dto.recurring,
                },
                actor,
            )
            .await?;

        let session = self
            .stripe
            .create_checkout_session(&CheckoutSessionParams {
                amount_minor,
                currency: &dto.currency,
                recurring: dto.recurring,
                product_name: &self.config.product_name,
                success_url: &self.config.success_url,
                cancel_url: &self.config.cancel_url,
                donation_id: donation.id,
                customer_email: donation.donor_email.as_deref(),
            })
            .await?;

        self.donations.set_session(donation.id, &session.id).await?;

        let checkout_url = session.url.ok_or_else(|| {
            AppError::ExternalServiceError("Stripe returned no redirect URL".to_string())
        })?;

        Ok(CheckoutResponseDto {
            donation_id: donation.id,
            session_id: session.id,
            checkout_url,
        })
    }

    /// Verify and dispatch one webhook delivery
    pub async fn handle_webhook(&self, payload: &[u8], signature_header: &str) -> Result<()> {
        webhook::verify_signature(
            payload,
            signature_header,
            &self.config.webhook_secret,
            self.config.webhook_tolerance,
            Utc::now().timestamp(),
        )?;

        let event: WebhookEvent = serde_json::from_slice(payload)
            .map_err(|e| AppError::BadRequest(format!("Malformed webhook payload: {}", e)))?;

        match event.event_type.as_str() {
            "checkout.session.completed" => {
                let session_id = session_id_of(&event)?;
                match self.donations.complete_by_session(session_id).await? {
                    Some(donation) => self.send_receipt(donation),
                    None => tracing::warn!(
                        "Webhook {} references unknown or already settled session {}",
                        event.id,
                        session_id
                    ),
                }
            }
            "checkout.session.expired" => {
                let session_id = session_id_of(&event)?;
                self.donations.fail_by_session(session_id).await?;
            }
            other => {
                tracing::debug!("Ignoring webhook event type {}", other);
            }
        }

        Ok(())
    }

    /// Fire-and-forget receipt email; delivery problems are logged, never
    /// surfaced to Stripe.
    fn send_receipt(&self, donation: Donation) {
        let Some(mailer) = self.mailer.clone() else {
            return;
        };
        let Some(email) = donation.donor_email.clone() else {
            return;
        };

        tokio::spawn(async move {
            let html = match templates::donation_receipt(
                donation.donor_name.as_deref(),
                donation.amount,
                &donation.currency,
            ) {
                Ok(html) => html,
                Err(e) => {
                    tracing::warn!("Failed to render donation receipt: {}", e);
                    return;
                }
            };

            if let Err(e) = mailer
                .send(OutgoingEmail {
                    to: email,
                    subject: "Thank you for your donation".to_string(),
                    html_body: html,
                })
                .await
            {
                tracing::warn!(
                    "Failed to send receipt for donation {}: {}",
                    donation.id,
                    e
                );
            }
        });
    }
}

fn session_id_of(event: &WebhookEvent) -> Result<&str> {
    event
        .data
        .object
        .get("id")
        .and_then(|v| v.as_str())
        .ok_or_else(|| AppError::BadRequest("Webhook object has no session id".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimal_conversion() {
        assert_eq!(minor_units(Decimal::new(1_000, 2), "usd").unwrap(), 1000); // 10.00
        assert_eq!(minor_units(Decimal::new(40, 2), "eur").unwrap(), 40); // 0.40
    }

    #[test]
    fn test_zero_decimal_conversion() {
        assert_eq!(minor_units(Decimal::from(500), "jpy").unwrap(), 500);
    }

    #[test]
    fn test_sub_unit_precision_rejected() {
        assert!(minor_units(Decimal::new(10_005, 3), "usd").is_err()); // 10.005
        assert!(minor_units(Decimal::new(5005, 1), "jpy").is_err()); // 500.5
    }

    #[test]
    fn test_below_minimum_detected() {
        // 0.40 in a 2-decimal currency converts to 40 minor units, under the
        // provider minimum of 50
        let minor = minor_units(Decimal::new(40, 2), "usd").unwrap();
        assert!(minor < MINIMUM_CHARGE_MINOR_UNITS);

        let minor = minor_units(Decimal::new(50, 2), "usd").unwrap();
        assert!(minor >= MINIMUM_CHARGE_MINOR_UNITS);
    }

    #[test]
    fn test_session_id_extraction() {
        let event: WebhookEvent = serde_json::from_str(
            r#"{"id":"evt_1","type":"checkout.session.completed","data":{"object":{"id":"cs_123"}}}"#,
        )
        .unwrap();
        assert_eq!(session_id_of(&event).unwrap(), "cs_123");

        let event: WebhookEvent = serde_json::from_str(
            r#"{"id":"evt_2","type":"checkout.session.completed","data":{"object":{}}}"#,
        )
        .unwrap();
        assert!(session_id_of(&event).is_err());
    }
}
