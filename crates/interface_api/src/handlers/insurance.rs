//! Insurance handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use core_kernel::InsuranceId;
use domain_insurance::{Insurance, InsuranceError};

use crate::{AppState, error::ApiError};
use crate::dto::insurance::{InsuranceRequest, InsuranceResponse};

fn read_body(payload: Result<Json<InsuranceRequest>, JsonRejection>) -> Result<Insurance, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    Ok(request.into())
}

/// Creates a record
pub async fn create_insurance(
    State(state): State<AppState>,
    payload: Result<Json<InsuranceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<InsuranceResponse>), ApiError> {
    let insurance = read_body(payload)?;
    let saved = state.service.create(insurance).await?;
    Ok((StatusCode::CREATED, Json(saved.into())))
}

/// Lists every record
pub async fn list_insurance(
    State(state): State<AppState>,
) -> Result<Json<Vec<InsuranceResponse>>, ApiError> {
    let records = state.service.get_all().await?;
    Ok(Json(records.into_iter().map(InsuranceResponse::from).collect()))
}

/// Gets a record by ID
pub async fn get_insurance(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<InsuranceResponse>, ApiError> {
    let id = InsuranceId::new(id);
    match state.service.get_by_id(id).await? {
        Some(insurance) => Ok(Json(insurance.into())),
        None => Err(InsuranceError::not_found(id).into()),
    }
}

/// Replaces the record stored under the path ID
pub async fn update_insurance(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<InsuranceRequest>, JsonRejection>,
) -> Result<Json<InsuranceResponse>, ApiError> {
    let insurance = read_body(payload)?;
    let updated = state.service.update(InsuranceId::new(id), insurance).await?;
    Ok(Json(updated.into()))
}

/// Deletes a record
pub async fn delete_insurance(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(InsuranceId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Premium of a stored record
pub async fn get_premium(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<f64>, ApiError> {
    let premium = state.service.calculate_premium(InsuranceId::new(id)).await?;
    Ok(Json(premium))
}

/// Claimed premiums summed per claim month; 204 when nothing is claimed
pub async fn total_premium_by_month(
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let totals = state.service.calculate_total_premium_by_month().await?;

    if totals.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(totals).into_response())
}
