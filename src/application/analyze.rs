use crate::application::history::TradeHistory;
use crate::application::prompts;
use crate::domain::entities::trade::CandidateTrade;
use crate::domain::error::DomainError;
use crate::domain::ports::completion::CompletionProvider;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct Analysis {
    pub output: String,
    pub stats: AnalysisStats,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisStats {
    pub total_trades: usize,
}

pub struct AnalyzeUseCase {
    history: Arc<TradeHistory>,
    completion: Arc<dyn CompletionProvider>,
}

impl AnalyzeUseCase {
    pub fn new(history: Arc<TradeHistory>, completion: Arc<dyn CompletionProvider>) -> Self {
        Self { history, completion }
    }

    /// Assess a candidate trade against the historical batch. A completion
    /// failure propagates to the caller; the history read itself never fails.
    pub async fn execute(&self, candidate: CandidateTrade) -> Result<Analysis, DomainError> {
        let trades = self.history.historical_trades().await;
        let prompt = prompts::analysis_prompt(&candidate, &trades);
        let output = self.completion.complete(&prompt).await?;
        Ok(Analysis {
            output,
            stats: AnalysisStats {
                total_trades: trades.len(),
            },
        })
    }
}
