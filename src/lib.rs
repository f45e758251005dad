pub mod application;
pub mod config;
pub mod domain;
pub mod http;
pub mod infrastructure;

use crate::application::analyze::{Analysis, AnalyzeUseCase};
use crate::application::chat::{ChatAnswer, ChatUseCase};
use crate::application::history::TradeHistory;
use crate::config::Config;
use crate::domain::entities::trade::{CandidateTrade, Trade};
use crate::domain::error::DomainError;
use crate::domain::ports::clock::{Clock, SystemClock};
use crate::domain::ports::completion::CompletionProvider;
use crate::domain::ports::document_store::DocumentStore;
use crate::infrastructure::gemini::GeminiProvider;
use crate::infrastructure::notion::NotionStore;
use std::sync::Arc;
use std::time::Duration;

pub struct TradeLens {
    history: Arc<TradeHistory>,
    analyze_uc: AnalyzeUseCase,
    chat_uc: ChatUseCase,
}

impl TradeLens {
    pub fn new(cfg: &Config) -> Result<Self, DomainError> {
        if cfg.notion_token.is_empty() || cfg.notion_database_id.is_empty() {
            return Err(DomainError::InvalidInput(
                "NOTION_TOKEN and NOTION_DATABASE_ID must be set".into(),
            ));
        }

        let store: Arc<dyn DocumentStore> = Arc::new(NotionStore::new(
            cfg.notion_token.clone(),
            cfg.notion_database_id.clone(),
            cfg.http_timeout,
        ));
        let completion: Arc<dyn CompletionProvider> = Arc::new(GeminiProvider::new(
            cfg.gemini_api_key.clone(),
            cfg.gemini_model.clone(),
            cfg.http_timeout,
        ));

        Ok(Self::with_providers(
            store,
            completion,
            Arc::new(SystemClock),
            cfg.cache_ttl,
        ))
    }

    pub fn with_providers(
        store: Arc<dyn DocumentStore>,
        completion: Arc<dyn CompletionProvider>,
        clock: Arc<dyn Clock>,
        cache_ttl: Duration,
    ) -> Self {
        let history = Arc::new(TradeHistory::new(store, clock, cache_ttl));
        Self {
            analyze_uc: AnalyzeUseCase::new(history.clone(), completion.clone()),
            chat_uc: ChatUseCase::new(history.clone(), completion),
            history,
        }
    }

    // Delegating methods
    pub async fn historical_trades(&self) -> Vec<Trade> {
        self.history.historical_trades().await
    }

    pub async fn confluence_labels(&self) -> Vec<String> {
        self.history.confluence_labels().await
    }

    pub async fn invalidate_cache(&self) {
        self.history.invalidate().await
    }

    pub async fn analyze(&self, candidate: CandidateTrade) -> Result<Analysis, DomainError> {
        self.analyze_uc.execute(candidate).await
    }

    pub async fn chat(&self, question: &str) -> Result<ChatAnswer, DomainError> {
        self.chat_uc.execute(question).await
    }
}
