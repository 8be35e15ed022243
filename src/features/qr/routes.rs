use std::sync::Arc;

use axum::{routing::get, Router};

use super::handlers::{qr_png, qr_svg};
use super::services::QrService;

pub fn routes(service: Arc<QrService>) -> Router {
    Router::new()
        .route("/api/qr/svg", get(qr_svg))
        .route("/api/qr/png", get(qr_png))
        .with_state(service)
}
