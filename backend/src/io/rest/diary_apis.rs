//! # REST API for Diary Entries

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
use shared::{
    CreateDiaryEntryRequest, DiaryEntry, SuccessResponse, UpdateDiaryEntryRequest, WithPetName,
};

const INVALID_ENTRY: &str = "Invalid diary entry data";
const ENTRY_NOT_FOUND: &str = "Diary entry not found";

/// Diary entries across the current user's pets, newest first
pub async fn list_diary_entries(
    State(state): State<AppState>,
) -> Result<Json<Vec<WithPetName<DiaryEntry>>>, ApiError> {
    info!("GET /api/diary");

    state
        .diary_service
        .list_entries(state.current_user_id)
        .await
        .map(Json)
        .map_err(|e| ApiError::internal("Failed to fetch diary entries", e))
}

pub async fn list_pet_diary_entries(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<DiaryEntry>>, ApiError> {
    let pet_id = path_id(id)?;
    info!("GET /api/pets/{}/diary", pet_id);

    state
        .diary_service
        .list_entries_for_pet(pet_id)
        .await
        .map(Json)
        .map_err(|e| ApiError::internal("Failed to fetch diary entries", e))
}

pub async fn get_diary_entry(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DiaryEntry>, ApiError> {
    let entry_id = path_id(id)?;
    info!("GET /api/diary/{}", entry_id);

    match state.diary_service.get_entry(entry_id).await {
        Ok(Some(entry)) => Ok(Json(entry)),
        Ok(None) => Err(ApiError::not_found(ENTRY_NOT_FOUND)),
        Err(e) => Err(ApiError::internal("Failed to fetch diary entry", e)),
    }
}

pub async fn create_diary_entry(
    State(state): State<AppState>,
    payload: Result<Json<CreateDiaryEntryRequest>, JsonRejection>,
) -> Result<Json<DiaryEntry>, ApiError> {
    let request = json_body(payload, INVALID_ENTRY)?;
    info!("POST /api/diary - request: {:?}", request);

    state
        .diary_service
        .create_entry(request)
        .await
        .map(Json)
        .map_err(|e| ApiError::internal("Failed to create diary entry", e))
}

pub async fn update_diary_entry(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateDiaryEntryRequest>, JsonRejection>,
) -> Result<Json<DiaryEntry>, ApiError> {
    let entry_id = path_id(id)?;
    let request = json_body(payload, INVALID_ENTRY)?;
    info!("PUT /api/diary/{} - request: {:?}", entry_id, request);

    match state.diary_service.update_entry(entry_id, request).await {
        Ok(Some(entry)) => Ok(Json(entry)),
        Ok(None) => Err(ApiError::not_found(ENTRY_NOT_FOUND)),
        Err(e) => Err(ApiError::internal("Failed to update diary entry", e)),
    }
}

pub async fn delete_diary_entry(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let entry_id = path_id(id)?;
    info!("DELETE /api/diary/{}", entry_id);

    match state.diary_service.delete_entry(entry_id).await {
        Ok(true) => Ok(Json(SuccessResponse { success: true })),
        Ok(false) => Err(ApiError::not_found(ENTRY_NOT_FOUND)),
        Err(e) => Err(ApiError::internal("Failed to delete diary entry", e)),
    }
}
