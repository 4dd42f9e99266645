use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::Response;
use serde::Serialize;

use crate::utils::error::AppError;
use crate::utils::response::{error, success};
use crate::AppState;

pub mod events;
pub mod feeds;
pub mod notifications;
pub mod trash;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "eventdesk-api",
    };

    success(payload)
}

/// GET / - every collection in one document.
pub async fn all_data(State(state): State<AppState>) -> Result<Response, AppError> {
    Ok(success(state.events.all_data().await?))
}

pub async fn not_found(method: Method, uri: Uri) -> Response {
    error(
        "NOT_FOUND",
        "Not found",
        Some(format!("Cannot {} {}", method, uri.path())),
        StatusCode::NOT_FOUND,
    )
}
