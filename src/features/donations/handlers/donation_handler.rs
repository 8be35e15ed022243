use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::donations::dtos::DonationResponseDto;
use crate::features::donations::services::DonationService;
use crate::shared::types::{ApiResponse, PaginationQuery};

/// List donations with pagination
#[utoipa::path(
    get,
    path = "/api/donations",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Paginated list of donations", body = ApiResponse<Vec<DonationResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "donations",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_donations(
    State(service): State<Arc<DonationService>>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<DonationResponseDto>>>> {
    let (donations, pagination) = service.list(&query).await?;
    let response: Vec<DonationResponseDto> = donations.into_iter().map(|d| d.into()).collect();

    Ok(Json(ApiResponse::success(
        Some(response),
        None,
        Some(pagination),
    )))
}

/// Get a single donation
#[utoipa::path(
    get,
    path = "/api/donations/{id}",
    params(
        ("id" = i64, Path, description = "Donation id")
    ),
    responses(
        (status = 200, description = "Donation", body = ApiResponse<DonationResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Donation not found")
    ),
    tag = "donations",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_donation(
    State(service): State<Arc<DonationService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<DonationResponseDto>>> {
    let donation = service.find_one(id).await?;
    let response: DonationResponseDto = donation.into();

    Ok(Json(ApiResponse::success(Some(response), None, None)))
}
