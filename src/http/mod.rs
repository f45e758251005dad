pub mod handlers;

use crate::TradeLens;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub fn router(app: Arc<TradeLens>) -> Router {
    Router::new()
        .route("/api/analyze", post(handlers::analyze))
        .route("/api/trades", get(handlers::trades))
        .route("/api/chat", post(handlers::chat))
        .route("/api/confluences", get(handlers::confluences))
        .route("/api/refresh", post(handlers::refresh))
        .with_state(app)
}
