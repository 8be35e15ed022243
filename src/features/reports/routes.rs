use std::sync::Arc;

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;

use super::handlers::{
    create_resource, get_resource, list_resources, remove_resource, update_resource,
};
use super::models::{
    EducationReport, FinancialAssistanceReport, ProcurementReport, RationReport, TrainingReport,
};
use super::resource::ReportResource;
use super::services::ResourceService;
use crate::features::auth::permissions::permission_guard;

/// Mount the five CRUD endpoints of one report resource, guarded by its
/// declared role set.
fn resource_routes<R: ReportResource>(pool: PgPool) -> Router {
    let service = Arc::new(ResourceService::<R>::new(pool));
    let base = format!("/api/{}", R::RESOURCE_PATH);

    Router::new()
        .route(
            &base,
            post(create_resource::<R>).get(list_resources::<R>),
        )
        .route(
            &format!("{}/{{id}}", base),
            get(get_resource::<R>)
                .patch(update_resource::<R>)
                .delete(remove_resource::<R>),
        )
        .route_layer(from_fn(permission_guard(R::ALLOWED_ROLES)))
        .with_state(service)
}

pub fn routes(pool: PgPool) -> Router {
    Router::new()
        .merge(resource_routes::<RationReport>(pool.clone()))
        .merge(resource_routes::<EducationReport>(pool.clone()))
        .merge(resource_routes::<TrainingReport>(pool.clone()))
        .merge(resource_routes::<ProcurementReport>(pool.clone()))
        .merge(resource_routes::<FinancialAssistanceReport>(pool))
}
