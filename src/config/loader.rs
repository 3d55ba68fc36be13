use std::env;

use super::env::{
    AppConfig, ConfigError, GroqConfig, KeywordConfig, LoggingConfig, ServerConfig,
};

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_env()
}

impl AppConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let server = ServerConfig {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".to_string()),
        };

        let groq = GroqConfig {
            api_keys: collect_api_keys(env::vars()),
            model: env::var("GROQ_MODEL")
                .unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string()),
        };
        if groq.api_keys.is_empty() {
            return Err(ConfigError::NoApiKeys);
        }

        let keywords = KeywordConfig {
            path: env::var("KEYWORDS_PATH").unwrap_or_else(|_| "keywords.csv".to_string()),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            logs_dir: env::var("LOGS_DIR").unwrap_or_else(|_| "logs".to_string()),
        };

        Ok(Self {
            server,
            groq,
            keywords,
            logging,
        })
    }
}

/// Gathers every `GROQ_API_KEY_*` variable, ordered by variable name so the
/// rotation order is stable across restarts.
fn collect_api_keys(vars: impl Iterator<Item = (String, String)>) -> Vec<String> {
    let mut keyed: Vec<(String, String)> = vars
        .filter(|(name, value)| name.starts_with("GROQ_API_KEY_") && !value.trim().is_empty())
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, value)| value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_api_keys_filters_and_orders_by_name() {
        let vars = vec![
            ("GROQ_API_KEY_2".to_string(), "beta".to_string()),
            ("PATH".to_string(), "/usr/bin".to_string()),
            ("GROQ_API_KEY_1".to_string(), "alpha".to_string()),
            ("GROQ_API_KEY_3".to_string(), "  ".to_string()),
        ];
        let keys = collect_api_keys(vars.into_iter());
        assert_eq!(keys, vec!["alpha".to_string(), "beta".to_string()]);
    }

    #[test]
    fn collect_api_keys_ignores_unrelated_variables() {
        let vars = vec![("GROQ_MODEL".to_string(), "llama".to_string())];
        assert!(collect_api_keys(vars.into_iter()).is_empty());
    }
}
