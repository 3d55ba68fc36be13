use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// The only failures visible at the HTTP boundary. Everything the pipeline
/// can recover from (rate limits, backend outages, corpus problems) never
/// reaches the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No data provided")]
    MissingPayload,
    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),
}

impl ApiError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingPayload | Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_bad_request() {
        assert_eq!(ApiError::MissingPayload.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidPayload("eof".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn missing_payload_message_matches_wire_contract() {
        assert_eq!(ApiError::MissingPayload.to_string(), "No data provided");
    }
}
