use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation::{validate_category_key, validate_positive_amount};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFinancialAssistanceReportDto {
    pub report_date: NaiveDate,

    /// Summary category key, e.g. "zakat" or "winter-aid"
    #[validate(custom(function = validate_category_key))]
    pub category: String,

    #[validate(custom(function = validate_positive_amount))]
    pub amount: Decimal,

    #[serde(default)]
    #[validate(range(min = 0, message = "beneficiaries must not be negative"))]
    pub beneficiaries: i32,

    #[validate(length(max = 2000, message = "notes must not exceed 2000 characters"))]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFinancialAssistanceReportDto {
    pub report_date: Option<NaiveDate>,

    #[validate(custom(function = validate_category_key))]
    pub category: Option<String>,

    #[validate(custom(function = validate_positive_amount))]
    pub amount: Option<Decimal>,

    #[validate(range(min = 0, message = "beneficiaries must not be negative"))]
    pub beneficiaries: Option<i32>,

    #[validate(length(max = 2000, message = "notes must not exceed 2000 characters"))]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_category_key_rejected() {
        let dto: CreateFinancialAssistanceReportDto = serde_json::from_str(
            r#"{"reportDate":"2024-06-01","category":"Winter Aid","amount":"100.00"}"#,
        )
        .unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_zero_amount_rejected() {
        let dto: CreateFinancialAssistanceReportDto = serde_json::from_str(
            r#"{"reportDate":"2024-06-01","category":"zakat","amount":"0"}"#,
        )
        .unwrap();
        assert!(dto.validate().is_err());
    }
}
