use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

use crate::models::EventFields;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};
use crate::AppState;

/// GET /event
pub async fn list_events(State(state): State<AppState>) -> Result<Response, AppError> {
    Ok(success(state.events.list().await?))
}

/// GET /event/:name
pub async fn get_event(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(name) = path?;
    Ok(success(state.events.get(&name).await?))
}

/// POST /event
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<EventFields>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(fields) = payload?;
    Ok(created(state.events.create(fields).await?))
}

/// PUT /event/:name
pub async fn update_event(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<EventFields>, JsonRejection>,
) -> Result<Response, AppError> {
    let Path(name) = path?;
    let Json(patch) = payload?;
    Ok(success(state.events.update(&name, patch).await?))
}

/// DELETE /event/:name - moves the event to the trash.
pub async fn delete_event(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(name) = path?;
    Ok(success(state.events.soft_delete(&name).await?))
}
