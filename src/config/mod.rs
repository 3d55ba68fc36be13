pub mod env;
mod loader;

pub use env::{AppConfig, ConfigError, GroqConfig, KeywordConfig, LoggingConfig, ServerConfig};
pub use loader::load_config;
