use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation::{validate_gender, validate_skill_level};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrainingReportDto {
    pub report_date: NaiveDate,

    #[validate(length(min = 1, max = 255, message = "course must be 1-255 characters"))]
    pub course: String,

    #[validate(custom(function = validate_skill_level))]
    pub skill_level: String,

    #[validate(custom(function = validate_gender))]
    pub gender: String,

    #[serde(default)]
    #[validate(range(min = 0, message = "trainees must not be negative"))]
    pub trainees: i32,

    #[serde(default)]
    #[validate(range(min = 0, message = "sessions must not be negative"))]
    pub sessions: i32,

    #[serde(default)]
    #[validate(range(min = 0, message = "completed must not be negative"))]
    pub completed: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrainingReportDto {
    pub report_date: Option<NaiveDate>,

    #[validate(length(min = 1, max = 255, message = "course must be 1-255 characters"))]
    pub course: Option<String>,

    #[validate(custom(function = validate_skill_level))]
    pub skill_level: Option<String>,

    #[validate(custom(function = validate_gender))]
    pub gender: Option<String>,

    #[validate(range(min = 0, message = "trainees must not be negative"))]
    pub trainees: Option<i32>,

    #[validate(range(min = 0, message = "sessions must not be negative"))]
    pub sessions: Option<i32>,

    #[validate(range(min = 0, message = "completed must not be negative"))]
    pub completed: Option<i32>,
}
