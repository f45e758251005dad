use crate::domain::values::position::Position;
use serde::{Deserialize, Serialize};

/// One normalized historical trade from the journal database.
///
/// String fields are `""` and numeric fields are `None` when the source
/// property is absent — callers must not conflate `None` with `0.0`.
/// Label lists keep source order; a relation that failed to resolve appears
/// as the `"Unknown"` sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub position: String,
    pub date: String,
    pub risk_reward: Option<f64>,
    pub outcome: String,
    pub confluences: Vec<String>,
    pub order_types: Vec<String>,
    pub sessions: Vec<String>,
    pub mistakes: Vec<String>,
    pub stop_loss_pips: Option<f64>,
    pub risk_percent: Option<f64>,
    pub pnl: Option<f64>,
    pub notes: String,
}

/// A prospective trade submitted for analysis. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateTrade {
    pub position: Position,
    pub session: String,
    pub confluences: Vec<String>,
    pub order_type: String,
    pub stop_loss_pips: Option<f64>,
    pub risk_reward: Option<f64>,
}
