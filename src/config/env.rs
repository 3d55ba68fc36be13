use thiserror::Error;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub groq: GroqConfig,
    pub keywords: KeywordConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
}

#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_keys: Vec<String>,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct KeywordConfig {
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub logs_dir: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no GROQ_API_KEY_* environment variables configured")]
    NoApiKeys,
}
