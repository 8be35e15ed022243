//! Declarative role checks for protected routes.
//!
//! Every protected router declares the role set allowed to reach its
//! handlers and mounts `permission_guard` as a route layer. The guard reads
//! the `AuthenticatedUser` placed in request extensions by the JWT
//! middleware, so it must always sit inside an authenticated router.

use axum::{extract::Request, middleware::Next, response::Response};

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;

pub fn permission_guard(
    allowed_roles: &'static [&'static str],
) -> impl Fn(
    Request,
    Next,
)
    -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, AppError>> + Send>>
       + Clone {
    move |req: Request, next: Next| {
        Box::pin(async move {
            let user = req
                .extensions()
                .get::<AuthenticatedUser>()
                .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))?;

            if !user.has_any_role(allowed_roles) {
                return Err(AppError::Forbidden(format!(
                    "Requires one of the roles: {}",
                    allowed_roles.join(", ")
                )));
            }

            Ok(next.run(req).await)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::FINANCE_ROLES;
    use crate::shared::test_helpers::{with_admin_auth, with_staff_auth};
    use axum::{http::StatusCode, middleware::from_fn, routing::get, Router};
    use axum_test::TestServer;

    async fn ok_handler() -> &'static str {
        "ok"
    }

    fn guarded_router() -> Router {
        Router::new()
            .route("/guarded", get(ok_handler))
            .route_layer(from_fn(permission_guard(FINANCE_ROLES)))
    }

    #[tokio::test]
    async fn test_allows_matching_role() {
        let server = TestServer::new(with_admin_auth(guarded_router())).unwrap();
        let response = server.get("/guarded").await;
        response.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn test_forbids_missing_role() {
        let server = TestServer::new(with_staff_auth(guarded_router())).unwrap();
        let response = server.get("/guarded").await;
        response.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_unauthenticated_rejected() {
        let server = TestServer::new(guarded_router()).unwrap();
        let response = server.get("/guarded").await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }
}
