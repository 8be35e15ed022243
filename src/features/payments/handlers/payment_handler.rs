use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::payments::dtos::{CheckoutResponseDto, CreateCheckoutDto};
use crate::features::payments::services::PaymentService;
use crate::shared::types::ApiResponse;

/// Open a Stripe checkout session for a donation
#[utoipa::path(
    post,
    path = "/api/payments/checkout",
    request_body = CreateCheckoutDto,
    responses(
        (status = 200, description = "Checkout session created", body = ApiResponse<CheckoutResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "Payment provider error")
    ),
    tag = "payments",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_checkout(
    State(service): State<Arc<PaymentService>>,
    user: AuthenticatedUser,
    AppJson(dto): AppJson<CreateCheckoutDto>,
) -> Result<Json<ApiResponse<CheckoutResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = service.create_checkout(dto, user.user_id).await?;

    Ok(Json(ApiResponse::success(
        Some(response),
        Some("Checkout session created".to_string()),
        None,
    )))
}

/// Stripe webhook receiver. Authentication is the signature header, not a
/// bearer token.
#[utoipa::path(
    post,
    path = "/api/payments/webhook",
    request_body(content = String, description = "Raw Stripe event payload"),
    responses(
        (status = 200, description = "Event processed"),
        (status = 400, description = "Invalid signature or payload")
    ),
    tag = "payments"
)]
pub async fn stripe_webhook(
    State(service): State<Arc<PaymentService>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ApiResponse<()>>> {
    let signature = headers
        .get("stripe-signature")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::BadRequest("Missing Stripe-Signature header".to_string()))?;

    service.handle_webhook(&body, signature).await?;

    Ok(Json(ApiResponse::success(
        None,
        Some("Event processed".to_string()),
        None,
    )))
}
