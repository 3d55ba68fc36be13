use std::collections::BTreeSet;
use std::fmt;

use crate::{
    domain::{ClassificationResult, RiskLabel},
    keywords::KeywordCorpus,
};

/// Risk theme attached to a phishing signature. Unrecognized corpus labels
/// land in `Other` so the weight table stays total.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Urgency,
    Financial,
    Crypto,
    Government,
    SecurityAccount,
    ItAdmin,
    Workplace,
    Legal,
    Ecommerce,
    GenericSuspicious,
    Social,
    Other(String),
}

impl Category {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Urgency" => Self::Urgency,
            "Financial" => Self::Financial,
            "Crypto" => Self::Crypto,
            "Government" => Self::Government,
            "Security/Account" => Self::SecurityAccount,
            "IT/Admin" => Self::ItAdmin,
            "Workplace" => Self::Workplace,
            "Legal" => Self::Legal,
            "E-commerce" => Self::Ecommerce,
            "Generic/Suspicious" => Self::GenericSuspicious,
            "Social" => Self::Social,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn weight(&self) -> u32 {
        match self {
            Self::Urgency | Self::Crypto | Self::Government => 5,
            Self::Financial | Self::Legal => 4,
            Self::SecurityAccount | Self::ItAdmin => 3,
            Self::Workplace | Self::Ecommerce | Self::GenericSuspicious => 2,
            Self::Social | Self::Other(_) => 1,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Urgency => "Urgency",
            Self::Financial => "Financial",
            Self::Crypto => "Crypto",
            Self::Government => "Government",
            Self::SecurityAccount => "Security/Account",
            Self::ItAdmin => "IT/Admin",
            Self::Workplace => "Workplace",
            Self::Legal => "Legal",
            Self::Ecommerce => "E-commerce",
            Self::GenericSuspicious => "Generic/Suspicious",
            Self::Social => "Social",
            Self::Other(label) => label.as_str(),
        };
        f.write_str(label)
    }
}

const PHISHING_THRESHOLD: u32 = 5;
const SUSPICIOUS_THRESHOLD: u32 = 2;

/// Weighted substring scan over the corpus. Every matching phrase adds its
/// category weight to the total; each category is reported once in the
/// reason regardless of how many of its phrases matched.
pub fn scan(text: &str, corpus: &KeywordCorpus) -> ClassificationResult {
    let haystack = text.to_lowercase();
    let mut total = 0u32;
    let mut matched: BTreeSet<&Category> = BTreeSet::new();

    for (phrase, category) in corpus.iter() {
        if haystack.contains(phrase.as_str()) {
            total += category.weight();
            matched.insert(category);
        }
    }

    let themes = || {
        matched
            .iter()
            .map(|category| category.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    if total >= PHISHING_THRESHOLD {
        ClassificationResult {
            label: RiskLabel::Phishing,
            reason: format!("High risk detected. Matches themes: {}.", themes()),
            confidence: 0.8,
        }
    } else if total >= SUSPICIOUS_THRESHOLD {
        ClassificationResult {
            label: RiskLabel::Suspicious,
            reason: format!("Caution: Found {} related phrases.", themes()),
            confidence: 0.5,
        }
    } else {
        ClassificationResult {
            label: RiskLabel::Safe,
            reason: "No high-risk phishing signatures detected in the text.".to_string(),
            confidence: 0.4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(entries: &[(&str, &str)]) -> KeywordCorpus {
        KeywordCorpus::from_entries(entries.iter().copied())
    }

    #[test]
    fn empty_text_is_safe() {
        let result = scan("", &corpus(&[("act now", "Urgency")]));
        assert_eq!(result.label, RiskLabel::Safe);
        assert_eq!(result.confidence, 0.4);
        assert_eq!(
            result.reason,
            "No high-risk phishing signatures detected in the text."
        );
    }

    #[test]
    fn single_medium_weight_match_is_suspicious() {
        let result = scan(
            "Your account suspended now",
            &corpus(&[("account suspended", "Security/Account")]),
        );
        assert_eq!(result.label, RiskLabel::Suspicious);
        assert_eq!(result.confidence, 0.5);
        assert!(result.reason.contains("Security/Account"));
    }

    #[test]
    fn single_weight_five_match_is_phishing() {
        let result = scan(
            "URGENT ACTION REQUIRED immediately",
            &corpus(&[("urgent action required", "Urgency")]),
        );
        assert_eq!(result.label, RiskLabel::Phishing);
        assert_eq!(result.confidence, 0.8);
        assert!(result.reason.contains("Urgency"));
    }

    #[test]
    fn weights_accumulate_across_phrases_of_one_category() {
        // Two weight-3 matches cross the phishing threshold even though the
        // category is reported once.
        let result = scan(
            "account suspended, please verify your account",
            &corpus(&[
                ("account suspended", "Security/Account"),
                ("verify your account", "Security/Account"),
            ]),
        );
        assert_eq!(result.label, RiskLabel::Phishing);
        assert_eq!(result.reason.matches("Security/Account").count(), 1);
    }

    #[test]
    fn multiple_categories_all_listed_once() {
        let result = scan(
            "wire transfer pending, gift card required",
            &corpus(&[
                ("wire transfer", "Financial"),
                ("gift card", "Generic/Suspicious"),
            ]),
        );
        assert_eq!(result.label, RiskLabel::Phishing);
        assert!(result.reason.contains("Financial"));
        assert!(result.reason.contains("Generic/Suspicious"));
    }

    #[test]
    fn unknown_category_defaults_to_weight_one() {
        let entries = corpus(&[("free trial", "Marketing"), ("click here", "Marketing")]);
        let result = scan("free trial, click here", &entries);
        assert_eq!(result.label, RiskLabel::Suspicious);
        assert!(result.reason.contains("Marketing"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let result = scan(
            "VERIFY YOUR ACCOUNT",
            &corpus(&[("Verify Your Account", "Security/Account")]),
        );
        assert_eq!(result.label, RiskLabel::Suspicious);
    }

    #[test]
    fn scan_is_deterministic() {
        let entries = corpus(&[
            ("wire transfer", "Financial"),
            ("act now", "Urgency"),
            ("tax refund", "Government"),
        ]);
        let text = "act now to claim your tax refund via wire transfer";
        assert_eq!(scan(text, &entries), scan(text, &entries));
    }

    #[test]
    fn empty_corpus_is_always_safe() {
        let result = scan("urgent wire transfer now", &KeywordCorpus::empty());
        assert_eq!(result.label, RiskLabel::Safe);
    }
}
