use std::sync::Arc;

use axum::{middleware::from_fn, routing::get, Router};

use super::handlers::{get_donation, list_donations};
use super::services::DonationService;
use crate::features::auth::permissions::permission_guard;
use crate::shared::constants::FINANCE_ROLES;

pub fn routes(service: Arc<DonationService>) -> Router {
    Router::new()
        .route("/api/donations", get(list_donations))
        .route("/api/donations/{id}", get(get_donation))
        .route_layer(from_fn(permission_guard(FINANCE_ROLES)))
        .with_state(service)
}
