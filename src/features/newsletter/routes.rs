use std::sync::Arc;

use axum::{routing::post, Router};

use super::handlers::{subscribe, unsubscribe};
use super::services::NewsletterService;

pub fn routes(service: Arc<NewsletterService>) -> Router {
    Router::new()
        .route("/api/newsletter/subscribe", post(subscribe))
        .route("/api/newsletter/unsubscribe", post(unsubscribe))
        .with_state(service)
}
