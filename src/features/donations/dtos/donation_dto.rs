use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::donations::models::{Donation, DonationStatus};

/// Response DTO for a donation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonationResponseDto {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donor_email: Option<String>,
    pub amount: Decimal,
    pub currency: String,
    pub recurring: bool,
    pub status: DonationStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Donation> for DonationResponseDto {
    fn from(d: Donation) -> Self {
        Self {
            id: d.id,
            donor_name: d.donor_name,
            donor_email: d.donor_email,
            amount: d.amount,
            currency: d.currency,
            recurring: d.recurring,
            status: d.status,
            created_at: d.created_at,
        }
    }
}
