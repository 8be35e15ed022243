use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for subscribing to the newsletter
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 255, message = "Name must not exceed 255 characters"))]
    pub name: Option<String>,
}

/// Request DTO for unsubscribing
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnsubscribeDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Response DTO for a subscription
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberResponseDto {
    pub id: i64,
    pub email: String,
}
