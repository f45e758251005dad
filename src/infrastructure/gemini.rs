use crate::domain::ports::completion::{CompletionError, CompletionProvider};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const RETRY_BACKOFF: Duration = Duration::from_millis(500);

pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

impl GeminiProvider {
    pub fn new(api_key: String, model: Option<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent("tradelens/0.1")
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            api_key,
            model: model.unwrap_or_else(|| "gemini-1.5-flash".to_string()),
            base_url: "https://generativelanguage.googleapis.com/v1beta".into(),
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String, CompletionError> {
        let resp = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateRequest {
                contents: vec![Content {
                    parts: vec![Part {
                        text: prompt.to_string(),
                    }],
                }],
            })
            .send()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(CompletionError::Network(format!(
                "Gemini API returned {}",
                resp.status()
            )));
        }

        let data: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| CompletionError::Parse(e.to_string()))?;

        data.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| CompletionError::Parse("empty completion response".to_string()))
    }
}

#[async_trait::async_trait]
impl CompletionProvider for GeminiProvider {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        if self.api_key.is_empty() {
            return Err(CompletionError::Config("GEMINI_API_KEY is not set".into()));
        }

        match self.generate(prompt).await {
            Ok(text) => Ok(text),
            // One retry after a short backoff, transport errors only.
            Err(CompletionError::Network(first)) => {
                tracing::warn!("completion attempt failed, retrying once: {first}");
                tokio::time::sleep(RETRY_BACKOFF).await;
                self.generate(prompt).await
            }
            Err(e) => Err(e),
        }
    }
}
