//! # REST API for Daily Tasks

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
use crate::domain::calendar::day_or_today;
use crate::AppState;
use shared::{
    CreateTaskRequest, DailyTaskSummary, SuccessResponse, Task, UpdateTaskRequest, WithPetName,
};

const INVALID_TASK: &str = "Invalid task data";
const TASK_NOT_FOUND: &str = "Task not found";

/// `?date=YYYY-MM-DD`; today (UTC) when omitted
#[derive(Debug, Deserialize)]
pub struct TaskDateQuery {
    pub date: Option<String>,
}

/// Tasks on a day across all of the current user's pets
pub async fn list_tasks(
    State(state): State<AppState>,
    query: Result<Query<TaskDateQuery>, QueryRejection>,
) -> Result<Json<Vec<WithPetName<Task>>>, ApiError> {
    let date = day_or_today(query_params(query)?.date);
    info!("GET /api/tasks - date: {}", date);

    state
        .task_service
        .list_tasks_for_date(state.current_user_id, &date)
        .await
        .map(Json)
        .map_err(|e| ApiError::internal("Failed to fetch tasks", e))
}

/// Completed and pending counts for a day
pub async fn get_task_summary(
    State(state): State<AppState>,
    query: Result<Query<TaskDateQuery>, QueryRejection>,
) -> Result<Json<DailyTaskSummary>, ApiError> {
    let date = day_or_today(query_params(query)?.date);
    info!("GET /api/tasks/summary - date: {}", date);

    state
        .task_service
        .daily_summary(state.current_user_id, &date)
        .await
        .map(Json)
        .map_err(|e| ApiError::internal("Failed to fetch task summary", e))
}

/// Tasks of one pet on a day
pub async fn list_pet_tasks(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    query: Result<Query<TaskDateQuery>, QueryRejection>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let pet_id = path_id(id)?;
    let date = day_or_today(query_params(query)?.date);
    info!("GET /api/pets/{}/tasks - date: {}", pet_id, date);

    state
        .task_service
        .list_tasks_for_pet(pet_id, &date)
        .await
        .map(Json)
        .map_err(|e| ApiError::internal("Failed to fetch tasks", e))
}

pub async fn get_task(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Task>, ApiError> {
    let task_id = path_id(id)?;
    info!("GET /api/tasks/{}", task_id);

    match state.task_service.get_task(task_id).await {
        Ok(Some(task)) => Ok(Json(task)),
        Ok(None) => Err(ApiError::not_found(TASK_NOT_FOUND)),
        Err(e) => Err(ApiError::internal("Failed to fetch task", e)),
    }
}

pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let request = json_body(payload, INVALID_TASK)?;
    info!("POST /api/tasks - request: {:?}", request);

    state
        .task_service
        .create_task(request)
        .await
        .map(Json)
        .map_err(|e| ApiError::internal("Failed to create task", e))
}

pub async fn update_task(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let task_id = path_id(id)?;
    let request = json_body(payload, INVALID_TASK)?;
    info!("PUT /api/tasks/{} - request: {:?}", task_id, request);

    match state.task_service.update_task(task_id, request).await {
        Ok(Some(task)) => Ok(Json(task)),
        Ok(None) => Err(ApiError::not_found(TASK_NOT_FOUND)),
        Err(e) => Err(ApiError::internal("Failed to update task", e)),
    }
}

pub async fn delete_task(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let task_id = path_id(id)?;
    info!("DELETE /api/tasks/{}", task_id);

    match state.task_service.delete_task(task_id).await {
        Ok(true) => Ok(Json(SuccessResponse { success: true })),
        Ok(false) => Err(ApiError::not_found(TASK_NOT_FOUND)),
        Err(e) => Err(ApiError::internal("Failed to delete task", e)),
    }
}
