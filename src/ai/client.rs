use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::{
    classifier::AiBackend,
    domain::{ClassificationRequest, ClassificationResult},
};

use super::inference::{build_request, build_user_prompt, parse_response, GROQ_API_URL};

/// Per-attempt deadline; a slow backend is treated as down, not retried.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum AiError {
    #[error("rate limited: {0}")]
    RateLimited(String),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("backend returned {status}: {body}")]
    Api { status: StatusCode, body: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl AiError {
    /// Rate limiting is the only failure worth retrying with another key;
    /// provider-specific detection stays inside the client.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }
}

#[derive(Clone)]
pub struct GroqClient {
    http: Client,
    model: String,
}

impl GroqClient {
    pub fn new(http: Client, model: String) -> Self {
        Self { http, model }
    }
}

impl AiBackend for GroqClient {
    async fn classify(
        &self,
        api_key: &str,
        request: &ClassificationRequest,
    ) -> Result<ClassificationResult, AiError> {
        let prompt = build_user_prompt(&request.sender_email, &request.text);
        let body = build_request(self.model.clone(), prompt);

        let response = self
            .http
            .post(GROQ_API_URL)
            .bearer_auth(api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if status == StatusCode::TOO_MANY_REQUESTS || body.contains("rate_limit_exceeded") {
                return Err(AiError::RateLimited(format!("{status}: {body}")));
            }
            return Err(AiError::Api { status, body });
        }

        parse_response(response).await
    }
}
