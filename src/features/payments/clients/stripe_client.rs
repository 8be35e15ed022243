use serde::Deserialize;

use crate::core::error::{AppError, Result};

/// Inputs for one checkout session. Amounts are already converted to the
/// provider's minor unit.
#[derive(Debug, Clone)]
pub struct CheckoutSessionParams<'a> {
    pub amount_minor: i64,
    pub currency: &'a str,
    pub recurring: bool,
    pub product_name: &'a str,
    pub success_url: &'a str,
    pub cancel_url: &'a str,
    pub donation_id: i64,
    pub customer_email: Option<&'a str>,
}

/// Checkout session response (only the fields this service reads)
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    #[serde(default)]
    message: String,
}

/// Client for the Stripe Checkout Sessions API
pub struct StripeClient {
    http_client: reqwest::Client,
    secret_key: String,
    api_base: String,
}

impl StripeClient {
    pub fn new(secret_key: String, api_base: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            secret_key,
            api_base,
        }
    }

    /// Create a checkout session
    ///
    /// `mode` follows the recurring flag: one-time payment or monthly
    /// subscription.
    pub async fn create_checkout_session(
        &self,
        params: &CheckoutSessionParams<'_>,
    ) -> Result<CheckoutSession> {
        let url = format!("{}/v1/checkout/sessions", self.api_base);
        let form = session_form(params);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Stripe request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<StripeErrorResponse>()
                .await
                .map(|e| e.error.message)
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(AppError::ExternalServiceError(format!(
                "Stripe rejected checkout session ({}): {}",
                status, message
            )));
        }

        let session: CheckoutSession = response.json().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Malformed Stripe response: {}", e))
        })?;

        tracing::info!("Stripe checkout session created: {}", session.id);

        Ok(session)
    }
}

/// Form-encoded body for the session-creation call
fn session_form(params: &CheckoutSessionParams<'_>) -> Vec<(String, String)> {
    let mode = if params.recurring {
        "subscription"
    } else {
        "payment"
    };

    let mut form = vec![
        ("mode".to_string(), mode.to_string()),
        ("success_url".to_string(), params.success_url.to_string()),
        ("cancel_url".to_string(), params.cancel_url.to_string()),
        ("line_items[0][quantity]".to_string(), "1".to_string()),
        (
            "line_items[0][price_data][currency]".to_string(),
            params.currency.to_string(),
        ),
        (
            "line_items[0][price_data][unit_amount]".to_string(),
            params.amount_minor.to_string(),
        ),
        (
            "line_items[0][price_data][product_data][name]".to_string(),
            params.product_name.to_string(),
        ),
        (
            "metadata[donation_id]".to_string(),
            params.donation_id.to_string(),
        ),
    ];

    if params.recurring {
        form.push((
            "line_items[0][price_data][recurring][interval]".to_string(),
            "month".to_string(),
        ));
    }

    if let Some(email) = params.customer_email {
        form.push(("customer_email".to_string(), email.to_string()));
    }

    form
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(recurring: bool) -> CheckoutSessionParams<'static> {
        CheckoutSessionParams {
            amount_minor: 1000,
            currency: "usd",
            recurring,
            product_name: "Donation",
            success_url: "https://example.org/ok",
            cancel_url: "https://example.org/no",
            donation_id: 12,
            customer_email: None,
        }
    }

    fn value<'a>(form: &'a [(String, String)], key: &str) -> Option<&'a str> {
        form.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_one_time_session_form() {
        let form = session_form(&params(false));
        assert_eq!(value(&form, "mode"), Some("payment"));
        assert_eq!(
            value(&form, "line_items[0][price_data][unit_amount]"),
            Some("1000")
        );
        assert_eq!(value(&form, "metadata[donation_id]"), Some("12"));
        assert!(value(&form, "line_items[0][price_data][recurring][interval]").is_none());
    }

    #[test]
    fn test_recurring_session_form() {
        let form = session_form(&params(true));
        assert_eq!(value(&form, "mode"), Some("subscription"));
        assert_eq!(
            value(&form, "line_items[0][price_data][recurring][interval]"),
            Some("month")
        );
    }

    #[test]
    fn test_customer_email_included_when_present() {
        let mut p = params(false);
        p.customer_email = Some("donor@example.org");
        let form = session_form(&p);
        assert_eq!(value(&form, "customer_email"), Some("donor@example.org"));
    }
}
