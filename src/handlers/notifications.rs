use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use serde::Serialize;

use crate::models::Notification;
use crate::utils::error::AppError;
use crate::utils::response::{success, with_message};
use crate::AppState;

#[derive(Serialize)]
struct DeletedNotification {
    notification: Notification,
}

/// GET /notifications
pub async fn list_notifications(State(state): State<AppState>) -> Result<Response, AppError> {
    Ok(success(state.events.list_notifications().await?))
}

/// DELETE /notifications/:id
pub async fn delete_notification(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = path?;
    let notification = state.events.delete_notification(&id).await?;
    Ok(with_message(
        "Notification deleted successfully",
        DeletedNotification { notification },
    ))
}
