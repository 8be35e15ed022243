use std::sync::Arc;

use axum::{middleware::from_fn, routing::get, Router};

use super::handlers::list_summaries;
use super::services::SummaryService;
use crate::features::auth::permissions::permission_guard;
use crate::shared::constants::FINANCE_ROLES;

pub fn routes(service: Arc<SummaryService>) -> Router {
    Router::new()
        .route("/api/summaries", get(list_summaries))
        .route_layer(from_fn(permission_guard(FINANCE_ROLES)))
        .with_state(service)
}
