use crate::application::history::TradeHistory;
use crate::application::prompts::{self, CHAT_HISTORY_LIMIT};
use crate::domain::error::DomainError;
use crate::domain::ports::completion::CompletionProvider;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct ChatAnswer {
    pub response: String,
    pub stats: ChatStats,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatStats {
    pub total_trades: usize,
    pub processed_trades: usize,
}

pub struct ChatUseCase {
    history: Arc<TradeHistory>,
    completion: Arc<dyn CompletionProvider>,
}

impl ChatUseCase {
    pub fn new(history: Arc<TradeHistory>, completion: Arc<dyn CompletionProvider>) -> Self {
        Self { history, completion }
    }

    pub async fn execute(&self, question: &str) -> Result<ChatAnswer, DomainError> {
        if question.trim().is_empty() {
            return Err(DomainError::InvalidInput("question is required".into()));
        }

        let trades = self.history.historical_trades().await;
        let prompt = prompts::chat_prompt(question, &trades);
        let response = self.completion.complete(&prompt).await?;
        Ok(ChatAnswer {
            response,
            stats: ChatStats {
                total_trades: trades.len(),
                processed_trades: trades.len().min(CHAT_HISTORY_LIMIT),
            },
        })
    }
}
