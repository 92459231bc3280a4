//! # REST API for Pet Management
//!
//! Pets are always created for the configured current user; a `userId` in the
//! body is ignored.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::Json,
};
use tracing::info;

use super::error::{json_body, path_id, ApiError};
use crate::AppState;
use shared::{CreatePetRequest, Pet, SuccessResponse, UpdatePetRequest};

const INVALID_PET: &str = "Invalid pet data";
const PET_NOT_FOUND: &str = "Pet not found";

/// List the current user's pets
pub async fn list_pets(State(state): State<AppState>) -> Result<Json<Vec<Pet>>, ApiError> {
    info!("GET /api/pets");

    state
        .pet_service
        .list_pets(state.current_user_id)
        .await
        .map(Json)
        .map_err(|e| ApiError::internal("Failed to fetch pets", e))
}

/// Get a pet by ID
pub async fn get_pet(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Pet>, ApiError> {
    let pet_id = path_id(id)?;
    info!("GET /api/pets/{}", pet_id);

    match state.pet_service.get_pet(pet_id).await {
        Ok(Some(pet)) => Ok(Json(pet)),
        Ok(None) => Err(ApiError::not_found(PET_NOT_FOUND)),
        Err(e) => Err(ApiError::internal("Failed to fetch pet", e)),
    }
}

/// Create a new pet
pub async fn create_pet(
    State(state): State<AppState>,
    payload: Result<Json<CreatePetRequest>, JsonRejection>,
) -> Result<Json<Pet>, ApiError> {
    let request = json_body(payload, INVALID_PET)?;
    info!("POST /api/pets - request: {:?}", request);

    state
        .pet_service
        .create_pet(state.current_user_id, request)
        .await
        .map(Json)
        .map_err(|e| ApiError::internal("Failed to create pet", e))
}

/// Update a pet with the supplied fields
pub async fn update_pet(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdatePetRequest>, JsonRejection>,
) -> Result<Json<Pet>, ApiError> {
    let pet_id = path_id(id)?;
    let request = json_body(payload, INVALID_PET)?;
    info!("PUT /api/pets/{} - request: {:?}", pet_id, request);

    match state.pet_service.update_pet(pet_id, request).await {
        Ok(Some(pet)) => Ok(Json(pet)),
        Ok(None) => Err(ApiError::not_found(PET_NOT_FOUND)),
        Err(e) => Err(ApiError::internal("Failed to update pet", e)),
    }
}

/// Delete a pet
pub async fn delete_pet(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let pet_id = path_id(id)?;
    info!("DELETE /api/pets/{}", pet_id);

    match state.pet_service.delete_pet(pet_id).await {
        Ok(true) => Ok(Json(SuccessResponse { success: true })),
        Ok(false) => Err(ApiError::not_found(PET_NOT_FOUND)),
        Err(e) => Err(ApiError::internal("Failed to delete pet", e)),
    }
}
