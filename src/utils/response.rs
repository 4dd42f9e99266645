use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Error body. `error` is always present; `message` only carries extra
/// detail when there is something safe to show.
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct MessageBody<T>
where
    T: Serialize,
{
    pub message: String,
    #[serde(flatten)]
    pub data: T,
}

pub fn success<T>(data: T) -> Response
where
    T: Serialize,
{
    (StatusCode::OK, Json(data)).into_response()
}

pub fn created<T>(data: T) -> Response
where
    T: Serialize,
{
    (StatusCode::CREATED, Json(data)).into_response()
}

/// A 200 body that pairs a human-readable message with the payload's fields.
pub fn with_message<T>(message: impl Into<String>, data: T) -> Response
where
    T: Serialize,
{
    let body = MessageBody {
        message: message.into(),
        data,
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub fn error(
    code: &str,
    error: impl Into<String>,
    message: Option<String>,
    status: StatusCode,
) -> Response {
    let body = ApiErrorBody {
        error: error.into(),
        code: code.to_string(),
        message,
    };

    (status, Json(body)).into_response()
}
