use crate::application::analyze::Analysis;
use crate::application::chat::ChatAnswer;
use crate::domain::entities::trade::{CandidateTrade, Trade};
use crate::domain::error::DomainError;
use crate::TradeLens;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub session: String,
    #[serde(default)]
    pub confluences: Vec<String>,
    #[serde(default)]
    pub order_type: String,
    #[serde(default)]
    pub sl: Option<f64>,
    #[serde(default)]
    pub rr: Option<f64>,
}

impl AnalyzeRequest {
    /// Validate into a candidate trade. Runs before any external call.
    pub fn into_candidate(self) -> Result<CandidateTrade, DomainError> {
        if self.position.trim().is_empty() {
            return Err(DomainError::InvalidInput("position is required".into()));
        }
        let position = self.position.parse().map_err(DomainError::InvalidInput)?;
        if self.session.trim().is_empty() {
            return Err(DomainError::InvalidInput("session is required".into()));
        }
        Ok(CandidateTrade {
            position,
            session: self.session,
            confluences: self.confluences,
            order_type: self.order_type,
            stop_loss_pips: self.sl,
            risk_reward: self.rr,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    question: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Client-facing error. Upstream failures log the internal error and carry a
/// generic message; validation errors echo what was wrong with the input.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidInput(msg) => ApiError {
                status: StatusCode::BAD_REQUEST,
                message: msg,
            },
            DomainError::Completion(internal) => {
                tracing::error!("completion failed: {internal}");
                ApiError {
                    status: StatusCode::BAD_GATEWAY,
                    message: "AI service is unavailable".into(),
                }
            }
            DomainError::Store(internal) => {
                tracing::error!("document store failed: {internal}");
                ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "Internal error".into(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

pub async fn analyze(
    State(app): State<Arc<TradeLens>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<Analysis>, ApiError> {
    let candidate = req.into_candidate()?;
    Ok(Json(app.analyze(candidate).await?))
}

pub async fn trades(State(app): State<Arc<TradeLens>>) -> Json<Vec<Trade>> {
    Json(app.historical_trades().await)
}

pub async fn chat(
    State(app): State<Arc<TradeLens>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatAnswer>, ApiError> {
    Ok(Json(app.chat(&req.question).await?))
}

pub async fn confluences(State(app): State<Arc<TradeLens>>) -> Json<Vec<String>> {
    Json(app.confluence_labels().await)
}

pub async fn refresh(State(app): State<Arc<TradeLens>>) -> StatusCode {
    app.invalidate_cache().await;
    StatusCode::NO_CONTENT
}
