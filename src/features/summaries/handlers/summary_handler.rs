use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::summaries::models::Summary;
use crate::features::summaries::services::SummaryService;
use crate::shared::types::ApiResponse;

/// List all category summaries
#[utoipa::path(
    get,
    path = "/api/summaries",
    responses(
        (status = 200, description = "List of category summaries", body = ApiResponse<Vec<Summary>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "summaries",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_summaries(
    State(service): State<Arc<SummaryService>>,
) -> Result<Json<ApiResponse<Vec<Summary>>>> {
    let summaries = service.list().await?;
    Ok(Json(ApiResponse::success(Some(summaries), None, None)))
}
