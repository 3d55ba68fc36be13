pub mod types;

pub use types::{ClassificationRequest, ClassificationResult, RiskLabel};
