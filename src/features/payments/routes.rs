use std::sync::Arc;

use axum::{middleware::from_fn, routing::post, Router};

use super::handlers::{create_checkout, stripe_webhook};
use super::services::PaymentService;
use crate::features::auth::permissions::permission_guard;
use crate::shared::constants::REPORT_ROLES;

/// Checkout requires a bearer token; mounted inside the authenticated tree.
pub fn protected_routes(service: Arc<PaymentService>) -> Router {
    Router::new()
        .route("/api/payments/checkout", post(create_checkout))
        .route_layer(from_fn(permission_guard(REPORT_ROLES)))
        .with_state(service)
}

/// The webhook authenticates with its signature header instead.
pub fn public_routes(service: Arc<PaymentService>) -> Router {
    Router::new()
        .route("/api/payments/webhook", post(stripe_webhook))
        .with_state(service)
}
