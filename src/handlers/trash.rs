use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::Response;

use crate::utils::error::AppError;
use crate::utils::response::success;
use crate::AppState;

/// GET /trash
pub async fn list_trash(State(state): State<AppState>) -> Result<Response, AppError> {
    Ok(success(state.events.list_trash().await?))
}

/// GET /trash/:name - restores the event.
pub async fn restore_event(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(name) = path?;
    Ok(success(state.events.restore(&name).await?))
}

/// DELETE /trash/:name - purges the event for good.
pub async fn purge_event(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(name) = path?;
    Ok(success(state.events.purge(&name).await?))
}
