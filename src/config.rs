use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub notion_token: String,
    pub notion_database_id: String,
    pub gemini_api_key: String,
    pub gemini_model: Option<String>,
    pub cache_ttl: Duration,
    pub http_timeout: Duration,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Config {
            bind_addr: env("BIND_ADDR", "127.0.0.1:3000"),
            notion_token: env("NOTION_TOKEN", ""),
            notion_database_id: env("NOTION_DATABASE_ID", ""),
            gemini_api_key: env("GEMINI_API_KEY", ""),
            gemini_model: std::env::var("GEMINI_MODEL").ok(),
            cache_ttl: Duration::from_secs(env("CACHE_TTL_SECS", "600").parse().unwrap_or(600)),
            http_timeout: Duration::from_secs(env("HTTP_TIMEOUT_SECS", "15").parse().unwrap_or(15)),
            log_level: env("LOG_LEVEL", "info"),
        }
    }
}
