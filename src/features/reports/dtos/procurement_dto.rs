use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation::validate_positive_amount;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProcurementReportDto {
    pub report_date: NaiveDate,

    #[validate(length(min = 1, max = 255, message = "supplier must be 1-255 characters"))]
    pub supplier: String,

    #[serde(default)]
    #[validate(range(min = 0, message = "items must not be negative"))]
    pub items: i32,

    #[validate(custom(function = validate_positive_amount))]
    pub total_cost: Decimal,

    #[validate(length(max = 2000, message = "description must not exceed 2000 characters"))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProcurementReportDto {
    pub report_date: Option<NaiveDate>,

    #[validate(length(min = 1, max = 255, message = "supplier must be 1-255 characters"))]
    pub supplier: Option<String>,

    #[validate(range(min = 0, message = "items must not be negative"))]
    pub items: Option<i32>,

    #[validate(custom(function = validate_positive_amount))]
    pub total_cost: Option<Decimal>,

    #[validate(length(max = 2000, message = "description must not exceed 2000 characters"))]
    pub description: Option<String>,
}
