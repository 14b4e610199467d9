use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use ta_core::Error;

/// Failure surfaced to HTTP callers. Internal details stay in the logs.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            Error::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            err if err.is_pipeline_failure() => {
                tracing::error!("inference failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Inference failed".to_string())
            }
            err => {
                tracing::error!("request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}
