use reqwest::Response;
use serde::{Deserialize, Serialize};

use crate::domain::ClassificationResult;

use super::client::AiError;

pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

const SYSTEM_PROMPT: &str = "You are a cyber security expert. Respond only in valid JSON.";

const USER_PROMPT_TEMPLATE: &str = r#"Act as a Senior Cyber Security Analyst specializing in Phishing Detection.
Analyze the following email metadata and content for malicious intent.

SENDER: {sender}
CONTENT: {email_content}

CHECKLIST FOR ANALYSIS:
1. SENDER REPUTATION: Does the sender address look spoofed or use a look-alike domain?
2. URGENCY & THREATS: Does it use "fear-ware" tactics (e.g., "Account locked", "Legal action")?
3. CALL TO ACTION: Is there a suspicious link or a request for sensitive info (PII)?
4. GRAMMAR/STYLE: Are there unusual errors or generic salutations like "Dear Customer"?

Return your final assessment in JSON format ONLY.
JSON FORMAT:
{
  "label": "phishing", "suspicious", or "safe",
  "reason": "Provide a concise explanation based on the checklist above.",
  "confidence": 0.0 to 1.0
}"#;

pub fn build_user_prompt(sender: &str, text: &str) -> String {
    USER_PROMPT_TEMPLATE
        .replace("{sender}", sender)
        .replace("{email_content}", text)
}

pub fn build_request(model: String, prompt: String) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model,
        messages: vec![
            ChatMessage {
                role: "system".into(),
                content: SYSTEM_PROMPT.into(),
            },
            ChatMessage {
                role: "user".into(),
                content: prompt,
            },
        ],
        temperature: 0.2,
        top_p: 1.0,
        max_tokens: 1024,
        response_format: ResponseFormat {
            r#type: "json_object".into(),
        },
    }
}

pub async fn parse_response(response: Response) -> Result<ClassificationResult, AiError> {
    let completion: ChatCompletionResponse = response
        .json()
        .await
        .map_err(|err| AiError::MalformedResponse(err.to_string()))?;

    let content = completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or_else(|| {
            AiError::MalformedResponse("completion did not contain message content".to_string())
        })?;

    serde_json::from_str(&content).map_err(|err| AiError::MalformedResponse(err.to_string()))
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: i32,
    pub response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub r#type: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: Option<ChatCompletionMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionMessage {
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_prompt_embeds_sender_and_content() {
        let prompt = build_user_prompt("billing@paypa1.com", "verify your account");
        assert!(prompt.contains("SENDER: billing@paypa1.com"));
        assert!(prompt.contains("CONTENT: verify your account"));
        assert!(prompt.contains("\"label\": \"phishing\", \"suspicious\", or \"safe\""));
    }

    #[test]
    fn request_is_constrained_to_json_output() {
        let request = build_request("llama-3.3-70b-versatile".into(), "prompt".into());
        assert_eq!(request.response_format.r#type, "json_object");
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[1].content, "prompt");
    }
}
