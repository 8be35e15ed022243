use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::newsletter::dtos::{SubscribeDto, SubscriberResponseDto, UnsubscribeDto};
use crate::features::newsletter::services::NewsletterService;
use crate::shared::types::ApiResponse;

/// Subscribe to the newsletter (public)
#[utoipa::path(
    post,
    path = "/api/newsletter/subscribe",
    request_body = SubscribeDto,
    responses(
        (status = 200, description = "Subscribed", body = ApiResponse<SubscriberResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Already subscribed")
    ),
    tag = "newsletter"
)]
pub async fn subscribe(
    State(service): State<Arc<NewsletterService>>,
    AppJson(dto): AppJson<SubscribeDto>,
) -> Result<Json<ApiResponse<SubscriberResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let subscriber = service.subscribe(dto).await?;

    Ok(Json(ApiResponse::success(
        Some(subscriber),
        Some("Subscribed to the newsletter".to_string()),
        None,
    )))
}

/// Unsubscribe from the newsletter (public)
#[utoipa::path(
    post,
    path = "/api/newsletter/unsubscribe",
    request_body = UnsubscribeDto,
    responses(
        (status = 200, description = "Unsubscribed"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "No active subscription")
    ),
    tag = "newsletter"
)]
pub async fn unsubscribe(
    State(service): State<Arc<NewsletterService>>,
    AppJson(dto): AppJson<UnsubscribeDto>,
) -> Result<Json<ApiResponse<()>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.unsubscribe(&dto.email).await?;

    Ok(Json(ApiResponse::success(
        None,
        Some("Unsubscribed from the newsletter".to_string()),
        None,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::lazy_test_pool;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    fn server() -> TestServer {
        let service = Arc::new(NewsletterService::new(lazy_test_pool(), None));
        TestServer::new(crate::features::newsletter::routes::routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_email_rejected_before_storage() {
        let response = server()
            .post("/api/newsletter/subscribe")
            .json(&json!({"email": "not-an-email"}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_body_rejected() {
        let response = server().post("/api/newsletter/subscribe").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
