use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Database model for a per-category running total
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub id: i64,
    pub category: String,
    pub total_amount: Decimal,
    pub entry_count: i64,
    pub updated_at: DateTime<Utc>,
}

/// Increment applied to a summary row when a value-bearing record is created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryDelta {
    pub category: String,
    pub amount: Decimal,
}
