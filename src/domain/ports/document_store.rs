use serde_json::Value;
use thiserror::Error;

/// One record from the hosted document store: an opaque stable id plus an
/// arbitrary bag of named properties. Property shapes are only interpreted
/// by the mapper; unknown properties pass through untouched.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawDocument {
    pub id: String,
    #[serde(default)]
    pub properties: Value,
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// The referenced document does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
    /// HTTP or network error.
    #[error("Network error: {0}")]
    Network(String),
    /// Response parsing error.
    #[error("Parse error: {0}")]
    Parse(String),
}

#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch every record in the trade collection. Adapters follow
    /// pagination internally; callers always see the complete result set.
    async fn query_all_documents(&self) -> Result<Vec<RawDocument>, StoreError>;

    /// Fetch a single document by id.
    async fn get_document(&self, id: &str) -> Result<RawDocument, StoreError>;
}
