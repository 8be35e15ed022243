//! Stripe webhook signature verification.
//!
//! The `Stripe-Signature` header carries a timestamp and one or more `v1`
//! HMAC-SHA256 signatures over `"{timestamp}.{payload}"`, keyed by the
//! shared endpoint secret. Comparison goes through `Mac::verify_slice`,
//! which is constant-time.

use std::time::Duration;

use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;

use crate::core::error::{AppError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Stripe event envelope (only the fields this service reads)
#[derive(Debug, Deserialize)]
pub struct WebhookEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: WebhookEventData,
}

#[derive(Debug, Deserialize)]
pub struct WebhookEventData {
    pub object: serde_json::Value,
}

/// Verify a `Stripe-Signature` header against the raw request body.
///
/// `now` is the caller's clock (unix seconds); events older or newer than
/// `tolerance` are rejected even with a valid signature.
pub fn verify_signature(
    payload: &[u8],
    header: &str,
    secret: &str,
    tolerance: Duration,
    now: i64,
) -> Result<()> {
    let mut timestamp: Option<i64> = None;
    let mut signatures: Vec<Vec<u8>> = Vec::new();

    for part in header.split(',') {
        let mut kv = part.trim().splitn(2, '=');
        match (kv.next(), kv.next()) {
            (Some("t"), Some(value)) => timestamp = value.parse().ok(),
            (Some("v1"), Some(value)) => {
                if let Ok(signature) = hex::decode(value) {
                    signatures.push(signature);
                }
            }
            _ => {}
        }
    }

    let timestamp = timestamp
        .ok_or_else(|| AppError::BadRequest("Missing timestamp in signature header".to_string()))?;

    if signatures.is_empty() {
        return Err(AppError::BadRequest(
            "No v1 signatures in signature header".to_string(),
        ));
    }

    if now.abs_diff(timestamp) > tolerance.as_secs() {
        return Err(AppError::BadRequest(
            "Webhook timestamp outside tolerance".to_string(),
        ));
    }

    let mut signed_payload = Vec::with_capacity(payload.len() + 16);
    signed_payload.extend_from_slice(timestamp.to_string().as_bytes());
    signed_payload.push(b'.');
    signed_payload.extend_from_slice(payload);

    for signature in &signatures {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|_| AppError::Internal("Invalid webhook secret".to_string()))?;
        mac.update(&signed_payload);
        if mac.verify_slice(signature).is_ok() {
            return Ok(());
        }
    }

    Err(AppError::BadRequest(
        "Webhook signature mismatch".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_test_secret";
    const PAYLOAD: &[u8] = br#"{"id":"evt_1","type":"checkout.session.completed"}"#;

    fn sign(payload: &[u8], timestamp: i64, secret: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(timestamp.to_string().as_bytes());
        mac.update(b".");
        mac.update(payload);
        hex::encode(mac.finalize().into_bytes())
    }

    #[test]
    fn test_valid_signature_verifies() {
        let now = 1_700_000_000;
        let header = format!("t={},v1={}", now, sign(PAYLOAD, now, SECRET));
        assert!(
            verify_signature(PAYLOAD, &header, SECRET, Duration::from_secs(300), now).is_ok()
        );
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let now = 1_700_000_000;
        let header = format!("t={},v1={}", now, sign(PAYLOAD, now, SECRET));
        let tampered = br#"{"id":"evt_2","type":"checkout.session.completed"}"#;
        assert!(
            verify_signature(tampered, &header, SECRET, Duration::from_secs(300), now).is_err()
        );
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let now = 1_700_000_000;
        let header = format!("t={},v1={}", now, sign(PAYLOAD, now, "whsec_other"));
        assert!(
            verify_signature(PAYLOAD, &header, SECRET, Duration::from_secs(300), now).is_err()
        );
    }

    #[test]
    fn test_stale_timestamp_rejected() {
        let signed_at = 1_700_000_000;
        let header = format!("t={},v1={}", signed_at, sign(PAYLOAD, signed_at, SECRET));
        let now = signed_at + 600;
        assert!(
            verify_signature(PAYLOAD, &header, SECRET, Duration::from_secs(300), now).is_err()
        );
    }

    #[test]
    fn test_second_v1_signature_accepted() {
        // Stripe sends multiple v1 entries during secret rotation
        let now = 1_700_000_000;
        let header = format!(
            "t={},v1={},v1={}",
            now,
            sign(PAYLOAD, now, "whsec_rotated_out"),
            sign(PAYLOAD, now, SECRET)
        );
        assert!(
            verify_signature(PAYLOAD, &header, SECRET, Duration::from_secs(300), now).is_ok()
        );
    }

    #[test]
    fn test_missing_timestamp_rejected() {
        let header = format!("v1={}", sign(PAYLOAD, 1_700_000_000, SECRET));
        assert!(verify_signature(
            PAYLOAD,
            &header,
            SECRET,
            Duration::from_secs(300),
            1_700_000_000
        )
        .is_err());
    }
}
