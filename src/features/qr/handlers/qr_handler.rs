use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::qr::dtos::QrQuery;
use crate::features::qr::services::{QrService, DEFAULT_QR_SIZE};

const CACHE_CONTROL_VALUE: &str = "public, max-age=86400";

/// Render the supplied text as an SVG QR code (public)
#[utoipa::path(
    get,
    path = "/api/qr/svg",
    params(QrQuery),
    responses(
        (status = 200, description = "SVG image", content_type = "image/svg+xml"),
        (status = 400, description = "Validation error")
    ),
    tag = "qr"
)]
pub async fn qr_svg(
    State(service): State<Arc<QrService>>,
    Query(query): Query<QrQuery>,
) -> Result<Response> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let svg = service.render_svg(&query.data, query.size.unwrap_or(DEFAULT_QR_SIZE))?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, CACHE_CONTROL_VALUE),
        ],
        svg,
    )
        .into_response())
}

/// Render the supplied text as a PNG QR code (public)
#[utoipa::path(
    get,
    path = "/api/qr/png",
    params(QrQuery),
    responses(
        (status = 200, description = "PNG image", content_type = "image/png"),
        (status = 400, description = "Validation error")
    ),
    tag = "qr"
)]
pub async fn qr_png(
    State(service): State<Arc<QrService>>,
    Query(query): Query<QrQuery>,
) -> Result<Response> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let png = service.render_png(&query.data, query.size.unwrap_or(DEFAULT_QR_SIZE))?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CACHE_CONTROL, CACHE_CONTROL_VALUE),
        ],
        png,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;

    fn server() -> TestServer {
        TestServer::new(crate::features::qr::routes::routes(Arc::new(QrService::new()))).unwrap()
    }

    #[tokio::test]
    async fn test_svg_endpoint() {
        let response = server().get("/api/qr/svg").add_query_param("data", "hi").await;
        response.assert_status(StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "image/svg+xml"
        );
    }

    #[tokio::test]
    async fn test_empty_data_rejected() {
        let response = server().get("/api/qr/svg").add_query_param("data", "").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_size_out_of_range_rejected() {
        let response = server()
            .get("/api/qr/png")
            .add_query_param("data", "hi")
            .add_query_param("size", "4096")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
