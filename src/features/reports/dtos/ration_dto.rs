use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for creating a ration report. Counts default to zero when
/// omitted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRationReportDto {
    pub report_date: NaiveDate,

    #[serde(default)]
    #[validate(range(min = 0, message = "quantity must not be negative"))]
    pub quantity: i32,

    #[serde(default)]
    #[validate(range(min = 0, message = "addition must not be negative"))]
    pub addition: i32,

    #[serde(default, rename = "left")]
    #[validate(range(min = 0, message = "left must not be negative"))]
    pub left_over: i32,

    #[serde(default)]
    #[validate(range(min = 0, message = "orphans must not be negative"))]
    pub orphans: i32,

    #[serde(default)]
    #[validate(range(min = 0, message = "divorced must not be negative"))]
    pub divorced: i32,

    #[serde(default)]
    #[validate(range(min = 0, message = "disabled must not be negative"))]
    pub disabled: i32,

    #[serde(default)]
    #[validate(range(min = 0, message = "indigent must not be negative"))]
    pub indigent: i32,
}

/// Partial update for a ration report
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRationReportDto {
    pub report_date: Option<NaiveDate>,

    #[validate(range(min = 0, message = "quantity must not be negative"))]
    pub quantity: Option<i32>,

    #[validate(range(min = 0, message = "addition must not be negative"))]
    pub addition: Option<i32>,

    #[serde(rename = "left")]
    #[validate(range(min = 0, message = "left must not be negative"))]
    pub left_over: Option<i32>,

    #[validate(range(min = 0, message = "orphans must not be negative"))]
    pub orphans: Option<i32>,

    #[validate(range(min = 0, message = "divorced must not be negative"))]
    pub divorced: Option<i32>,

    #[validate(range(min = 0, message = "disabled must not be negative"))]
    pub disabled: Option<i32>,

    #[validate(range(min = 0, message = "indigent must not be negative"))]
    pub indigent: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_counts_default_to_zero() {
        let dto: CreateRationReportDto =
            serde_json::from_str(r#"{"reportDate":"2024-03-15","quantity":5}"#).unwrap();
        assert_eq!(dto.quantity, 5);
        assert_eq!(dto.addition, 0);
        assert_eq!(dto.left_over, 0);
        assert_eq!(dto.orphans, 0);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_left_alias() {
        let dto: CreateRationReportDto =
            serde_json::from_str(r#"{"reportDate":"2024-03-15","left":3}"#).unwrap();
        assert_eq!(dto.left_over, 3);
    }

    #[test]
    fn test_negative_count_rejected() {
        let dto: CreateRationReportDto =
            serde_json::from_str(r#"{"reportDate":"2024-03-15","quantity":-1}"#).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_missing_report_date_rejected() {
        let result: Result<CreateRationReportDto, _> = serde_json::from_str(r#"{"quantity":5}"#);
        assert!(result.is_err());
    }
}
