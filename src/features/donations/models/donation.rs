use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "donation_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DonationStatus {
    Pending,
    Completed,
    Failed,
}

/// Database model for a donation
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: i64,
    pub donor_name: Option<String>,
    pub donor_email: Option<String>,
    pub amount: Decimal,
    pub currency: String,
    pub recurring: bool,
    pub status: DonationStatus,
    pub stripe_session_id: Option<String>,
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields persisted when a checkout is opened
#[derive(Debug, Clone)]
pub struct NewDonation {
    pub donor_name: Option<String>,
    pub donor_email: Option<String>,
    pub amount: Decimal,
    pub currency: String,
    pub recurring: bool,
}
