use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        let code = self.code().as_str();
        match &self {
            AppError::InvalidInput(_)
            | AppError::ParseFailure(_)
            | AppError::AlreadyRegistered => {
                tracing::warn!(error = ?self, code, "Request rejected")
            }
            AppError::StoreUnavailable(_) | AppError::Internal(_) => {
                tracing::error!(error = ?self, code, "Request failed")
            }
        }

        match self {
            AppError::InvalidInput(_) => {
                error_resp(StatusCode::BAD_REQUEST, "Invalid email or name")
            }
            AppError::ParseFailure(_) => {
                error_resp(StatusCode::BAD_REQUEST, "Invalid request format")
            }
            AppError::AlreadyRegistered => (
                StatusCode::CONFLICT,
                Json(serde_json::json!({ "message": "Email already registered" })),
            )
                .into_response(),
            AppError::StoreUnavailable(_) | AppError::Internal(_) => {
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

fn error_resp(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
