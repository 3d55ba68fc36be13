use std::sync::Arc;

use axum::{body::Bytes, extract::State, routing::post, Json, Router};

use crate::{
    ai::GroqClient,
    classifier::Classifier,
    domain::{ClassificationRequest, ClassificationResult},
    server::error::ApiError,
};

pub type SharedClassifier = Arc<Classifier<GroqClient>>;

pub fn router(classifier: SharedClassifier) -> Router {
    Router::new()
        .route("/api/classify", post(classify))
        .with_state(classifier)
}

async fn classify(
    State(classifier): State<SharedClassifier>,
    body: Bytes,
) -> Result<Json<ClassificationResult>, ApiError> {
    let request = decode_request(&body)?;
    tracing::debug!(
        target: "http",
        sender = %request.sender_email,
        text_len = request.text.len(),
        "classification request"
    );
    Ok(Json(classifier.classify(&request).await))
}

fn decode_request(body: &[u8]) -> Result<ClassificationRequest, ApiError> {
    if body.is_empty() {
        return Err(ApiError::MissingPayload);
    }
    serde_json::from_slice(body).map_err(|err| ApiError::InvalidPayload(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_is_a_client_error() {
        assert!(matches!(
            decode_request(b""),
            Err(ApiError::MissingPayload)
        ));
    }

    #[test]
    fn non_json_body_is_a_client_error() {
        assert!(matches!(
            decode_request(b"plain text"),
            Err(ApiError::InvalidPayload(_))
        ));
    }

    #[test]
    fn partial_payload_fills_defaults() {
        let request = decode_request(br#"{"text": "hello"}"#).unwrap();
        assert_eq!(request.sender_email, "Unknown");
        assert_eq!(request.text, "hello");
    }

    #[test]
    fn full_payload_round_trips() {
        let request =
            decode_request(br#"{"sender_email": "a@b.com", "text": "hi"}"#).unwrap();
        assert_eq!(request.sender_email, "a@b.com");
        assert_eq!(request.text, "hi");
    }
}
