use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation::validate_education_level;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEducationReportDto {
    pub report_date: NaiveDate,

    #[validate(length(min = 1, max = 255, message = "program must be 1-255 characters"))]
    pub program: String,

    #[validate(custom(function = validate_education_level))]
    pub level: String,

    #[serde(default)]
    #[validate(range(min = 0, message = "students must not be negative"))]
    pub students: i32,

    #[serde(default)]
    #[validate(range(min = 0, message = "teachers must not be negative"))]
    pub teachers: i32,

    #[serde(default)]
    #[validate(range(min = 0, message = "graduates must not be negative"))]
    pub graduates: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEducationReportDto {
    pub report_date: Option<NaiveDate>,

    #[validate(length(min = 1, max = 255, message = "program must be 1-255 characters"))]
    pub program: Option<String>,

    #[validate(custom(function = validate_education_level))]
    pub level: Option<String>,

    #[validate(range(min = 0, message = "students must not be negative"))]
    pub students: Option<i32>,

    #[validate(range(min = 0, message = "teachers must not be negative"))]
    pub teachers: Option<i32>,

    #[validate(range(min = 0, message = "graduates must not be negative"))]
    pub graduates: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_level_rejected() {
        let dto: CreateEducationReportDto = serde_json::from_str(
            r#"{"reportDate":"2024-01-10","program":"Literacy","level":"kindergarten"}"#,
        )
        .unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_valid_level_accepted() {
        let dto: CreateEducationReportDto = serde_json::from_str(
            r#"{"reportDate":"2024-01-10","program":"Literacy","level":"elementary"}"#,
        )
        .unwrap();
        assert!(dto.validate().is_ok());
    }
}
