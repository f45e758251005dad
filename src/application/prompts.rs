//! Prompt composition for the completion service.
//!
//! The similarity scoring and success-rate assessment are delegated to the
//! model; these templates only lay out the candidate trade and the historical
//! batch as text.

use crate::domain::entities::trade::{CandidateTrade, Trade};
use std::fmt::Write;

/// Maximum number of historical trades included in a chat prompt.
pub const CHAT_HISTORY_LIMIT: usize = 50;

fn num(v: Option<f64>) -> String {
    match v {
        Some(n) => n.to_string(),
        None => "-".to_string(),
    }
}

fn trade_line(index: usize, t: &Trade) -> String {
    format!(
        "{}. {} | RR:{} | PnL:{} | {} | {} | SL:{} | {} | {} | {} | Mistakes:{} | Notes:{}",
        index + 1,
        t.position,
        num(t.risk_reward),
        num(t.pnl),
        t.confluences.join(","),
        t.sessions.join(","),
        num(t.stop_loss_pips),
        t.order_types.join(","),
        t.date,
        t.outcome,
        t.mistakes.join(","),
        t.notes,
    )
}

fn history_block(trades: &[Trade], limit: usize) -> String {
    let mut block = String::new();
    for (i, t) in trades.iter().take(limit).enumerate() {
        let _ = writeln!(block, "{}", trade_line(i, t));
    }
    block
}

pub fn analysis_prompt(candidate: &CandidateTrade, trades: &[Trade]) -> String {
    format!(
        "NEW TRADE:\n\
         Position: {position}\n\
         Session: {session}\n\
         Confluences: {confluences}\n\
         Order type: {order_type}\n\
         SL (pips): {sl}\n\
         Planned RR: {rr}\n\
         \n\
         TRADE HISTORY ({count} trades):\n\
         {history}\n\
         TASK:\n\
         - Compare the new trade with similar historical trades and estimate its success probability.\n\
         - Compute the risk:reward.\n\
         - Summarize the confluence factors and give a short verdict on the trade.\n\
         - Answer briefly and clearly.",
        position = candidate.position,
        session = candidate.session,
        confluences = candidate.confluences.join(", "),
        order_type = candidate.order_type,
        sl = num(candidate.stop_loss_pips),
        rr = num(candidate.risk_reward),
        count = trades.len(),
        history = history_block(trades, trades.len()),
    )
}

pub fn chat_prompt(question: &str, trades: &[Trade]) -> String {
    format!(
        "USER QUESTION: {question}\n\
         \n\
         TRADE DATABASE ({count} trades):\n\
         {history}\n\
         TASK:\n\
         Answer the user's question from the historical trading data.\n\
         Be concrete; use numbers and statistics from the data.\n\
         If the question needs a success rate, PnL, or another metric, do the computation.\n\
         If the question is not about the trading data, politely steer back to trading topics.\n\
         Answer clearly and structured, in at most 8 sentences.",
        count = trades.len(),
        history = history_block(trades, CHAT_HISTORY_LIMIT),
    )
}
