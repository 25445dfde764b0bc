use std::sync::Arc;

use axum::{
    Json, Router, body::Bytes, extract::State, http::StatusCode, response::IntoResponse,
    routing::post,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    use_cases::waitlist::WaitlistUseCases,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/register", post(register))
}

// Missing fields are a validation failure, not a parse failure.
#[derive(Deserialize, Default, Debug)]
struct RegisterPayload {
    name: Option<String>,
    email: Option<String>,
}

#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

/// Decode the body as JSON whatever the Content-Type says.
///
/// `null` and undecodable bodies are parse failures. Any other non-object
/// (array, string, number, bool) carries no fields and is left to validation.
fn parse_payload(body: &[u8]) -> AppResult<RegisterPayload> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| AppError::ParseFailure(e.to_string()))?;

    match value {
        Value::Null => Err(AppError::ParseFailure("Request body is null".into())),
        Value::Object(_) => {
            serde_json::from_value(value).map_err(|e| AppError::ParseFailure(e.to_string()))
        }
        _ => Ok(RegisterPayload::default()),
    }
}

/// POST /api/register
async fn register(
    State(waitlist): State<Arc<WaitlistUseCases>>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let payload = parse_payload(&body)?;

    waitlist
        .register(payload.name.as_deref(), payload.email.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Email registered successfully",
        }),
    ))
}
