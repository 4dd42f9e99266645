use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Json;

use crate::models::{NewsInput, RegistrationInput, SummaryInput};
use crate::utils::error::AppError;
use crate::utils::response::{created, success};
use crate::AppState;

/// GET /latest
pub async fn list_news(State(state): State<AppState>) -> Result<Response, AppError> {
    Ok(success(state.feeds.list_news().await?))
}

/// POST /latest
pub async fn create_news(
    State(state): State<AppState>,
    payload: Result<Json<NewsInput>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(input) = payload?;
    Ok(created(state.feeds.create_news(input).await?))
}

/// GET /registration
pub async fn list_registrations(State(state): State<AppState>) -> Result<Response, AppError> {
    Ok(success(state.feeds.list_registrations().await?))
}

/// POST /registration
pub async fn create_registration(
    State(state): State<AppState>,
    payload: Result<Json<RegistrationInput>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(input) = payload?;
    Ok(created(state.feeds.create_registration(input).await?))
}

/// GET /summary
pub async fn list_summaries(State(state): State<AppState>) -> Result<Response, AppError> {
    Ok(success(state.feeds.list_summaries().await?))
}

/// POST /summary
pub async fn create_summary(
    State(state): State<AppState>,
    payload: Result<Json<SummaryInput>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(input) = payload?;
    Ok(created(state.feeds.create_summary(input).await?))
}
