use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompletionError {
    /// HTTP or network error, including timeouts.
    #[error("Network error: {0}")]
    Network(String),
    /// The service answered but the response could not be interpreted.
    #[error("Parse error: {0}")]
    Parse(String),
    /// Missing API key or other configuration problem.
    #[error("Config error: {0}")]
    Config(String),
}

/// Single-shot, stateless text completion. No streaming, no conversation
/// state: one prompt in, one text out.
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}
