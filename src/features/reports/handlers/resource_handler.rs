use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::reports::resource::{ListQuery, ReportResource};
use crate::features::reports::services::ResourceService;
use crate::shared::types::ApiResponse;

pub async fn create_resource<R: ReportResource>(
    State(service): State<Arc<ResourceService<R>>>,
    user: AuthenticatedUser,
    AppJson(dto): AppJson<R::Create>,
) -> Result<Json<ApiResponse<R>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let record = service.create(dto, user.user_id).await?;

    Ok(Json(ApiResponse::success(
        Some(record),
        Some(format!("{} created successfully", R::RESOURCE_NAME)),
        None,
    )))
}

pub async fn list_resources<R: ReportResource>(
    State(service): State<Arc<ResourceService<R>>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<R>>>> {
    let (records, pagination) = service.find_all(&query).await?;

    Ok(Json(ApiResponse::success(
        Some(records),
        None,
        Some(pagination),
    )))
}

pub async fn get_resource<R: ReportResource>(
    State(service): State<Arc<ResourceService<R>>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<R>>> {
    let record = service.find_one(id).await?;

    Ok(Json(ApiResponse::success(Some(record), None, None)))
}

pub async fn update_resource<R: ReportResource>(
    State(service): State<Arc<ResourceService<R>>>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<R::Update>,
) -> Result<Json<ApiResponse<R>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let record = service.update(id, dto, user.user_id).await?;

    Ok(Json(ApiResponse::success(
        Some(record),
        Some(format!("{} updated successfully", R::RESOURCE_NAME)),
        None,
    )))
}

pub async fn remove_resource<R: ReportResource>(
    State(service): State<Arc<ResourceService<R>>>,
    user: AuthenticatedUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.remove(id, user.user_id).await?;

    Ok(Json(ApiResponse::success(
        None,
        Some(format!("{} archived successfully", R::RESOURCE_NAME)),
        None,
    )))
}
