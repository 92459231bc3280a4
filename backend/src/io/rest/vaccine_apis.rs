//! # REST API for Vaccinations

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::Json,
};
use serde::Deserialize;
use tracing::info;

use super::error::{json_body, path_id, query_params, ApiError};
use crate::domain::calendar::today;
use crate::AppState;
use shared::{
    CreateVaccineRequest, SuccessResponse, UpdateVaccineRequest, Vaccine, VaccineSchedule,
    WithPetName,
};

const INVALID_VACCINE: &str = "Invalid vaccine data";
const VACCINE_NOT_FOUND: &str = "Vaccine not found";

/// Widest `withinDays` window a request may ask for
pub const MAX_WITHIN_DAYS: u32 = 36_500;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccineScheduleQuery {
    pub within_days: Option<u32>,
}

/// All vaccines of the current user's pets
pub async fn list_vaccines(
    State(state): State<AppState>,
) -> Result<Json<Vec<WithPetName<Vaccine>>>, ApiError> {
    info!("GET /api/vaccines");

    state
        .vaccine_service
        .list_vaccines(state.current_user_id)
        .await
        .map(Json)
        .map_err(|e| ApiError::internal("Failed to fetch vaccines", e))
}

/// Overdue, due soon, later, unscheduled and completed vaccines as of today
pub async fn get_vaccine_schedule(
    State(state): State<AppState>,
    query: Result<Query<VaccineScheduleQuery>, QueryRejection>,
) -> Result<Json<VaccineSchedule>, ApiError> {
    let within_days = match query_params(query)?.within_days {
        Some(days) if days > MAX_WITHIN_DAYS => {
            return Err(ApiError::bad_request(
                "Invalid query",
                format!("withinDays must be at most {}", MAX_WITHIN_DAYS),
            ))
        }
        Some(days) => days,
        None => state.due_soon_days,
    };
    info!("GET /api/vaccines/schedule - within {} days", within_days);

    state
        .vaccine_service
        .schedule(state.current_user_id, today(), within_days)
        .await
        .map(Json)
        .map_err(|e| ApiError::internal("Failed to fetch vaccine schedule", e))
}

pub async fn list_pet_vaccines(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Vaccine>>, ApiError> {
    let pet_id = path_id(id)?;
    info!("GET /api/pets/{}/vaccines", pet_id);

    state
        .vaccine_service
        .list_vaccines_for_pet(pet_id)
        .await
        .map(Json)
        .map_err(|e| ApiError::internal("Failed to fetch vaccines", e))
}

pub async fn get_vaccine(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vaccine>, ApiError> {
    let vaccine_id = path_id(id)?;
    info!("GET /api/vaccines/{}", vaccine_id);

    match state.vaccine_service.get_vaccine(vaccine_id).await {
        Ok(Some(vaccine)) => Ok(Json(vaccine)),
        Ok(None) => Err(ApiError::not_found(VACCINE_NOT_FOUND)),
        Err(e) => Err(ApiError::internal("Failed to fetch vaccine", e)),
    }
}

pub async fn create_vaccine(
    State(state): State<AppState>,
    payload: Result<Json<CreateVaccineRequest>, JsonRejection>,
) -> Result<Json<Vaccine>, ApiError> {
    let request = json_body(payload, INVALID_VACCINE)?;
    info!("POST /api/vaccines - request: {:?}", request);

    state
        .vaccine_service
        .create_vaccine(request)
        .await
        .map(Json)
        .map_err(|e| ApiError::internal("Failed to create vaccine", e))
}

pub async fn update_vaccine(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateVaccineRequest>, JsonRejection>,
) -> Result<Json<Vaccine>, ApiError> {
    let vaccine_id = path_id(id)?;
    let request = json_body(payload, INVALID_VACCINE)?;
    info!("PUT /api/vaccines/{} - request: {:?}", vaccine_id, request);

    match state.vaccine_service.update_vaccine(vaccine_id, request).await {
        Ok(Some(vaccine)) => Ok(Json(vaccine)),
        Ok(None) => Err(ApiError::not_found(VACCINE_NOT_FOUND)),
        Err(e) => Err(ApiError::internal("Failed to update vaccine", e)),
    }
}

pub async fn delete_vaccine(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let vaccine_id = path_id(id)?;
    info!("DELETE /api/vaccines/{}", vaccine_id);

    match state.vaccine_service.delete_vaccine(vaccine_id).await {
        Ok(true) => Ok(Json(SuccessResponse { success: true })),
        Ok(false) => Err(ApiError::not_found(VACCINE_NOT_FOUND)),
        Err(e) => Err(ApiError::internal("Failed to delete vaccine", e)),
    }
}
