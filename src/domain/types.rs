use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLabel {
    Phishing,
    Suspicious,
    Safe,
}

/// Inbound payload for a single classification call. Both fields are
/// optional in the JSON body.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassificationRequest {
    #[serde(default = "default_sender")]
    pub sender_email: String,
    #[serde(default)]
    pub text: String,
}

fn default_sender() -> String {
    "Unknown".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: RiskLabel,
    pub reason: String,
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_apply_when_fields_missing() {
        let request: ClassificationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.sender_email, "Unknown");
        assert_eq!(request.text, "");
    }

    #[test]
    fn risk_label_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RiskLabel::Phishing).unwrap(),
            "\"phishing\""
        );
        let label: RiskLabel = serde_json::from_str("\"safe\"").unwrap();
        assert_eq!(label, RiskLabel::Safe);
    }
}
