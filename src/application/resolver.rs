use crate::application::mapper::{self, ResolvedRelations};
use crate::domain::ports::document_store::{DocumentStore, RawDocument};
use futures::future::join_all;
use std::sync::Arc;

/// Label substituted when a relation reference cannot be resolved.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Resolves relation references to human-readable labels by fetching each
/// referenced document and extracting its title.
pub struct RelationResolver {
    store: Arc<dyn DocumentStore>,
}

impl RelationResolver {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Resolve each reference id to its title label.
    ///
    /// Lookups run concurrently; the output preserves input order (index i of
    /// the input maps to index i of the output). A lookup that fails for any
    /// reason yields `"Unknown"` for that entry only — no retries, and the
    /// rest of the batch is unaffected. Empty input performs no store calls.
    pub async fn resolve_labels(&self, ids: &[String]) -> Vec<String> {
        if ids.is_empty() {
            return Vec::new();
        }
        join_all(ids.iter().map(|id| self.resolve_one(id))).await
    }

    async fn resolve_one(&self, id: &str) -> String {
        match self.store.get_document(id).await {
            Ok(doc) => mapper::title_text(&doc).unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
            Err(e) => {
                tracing::debug!("relation {id} did not resolve: {e}");
                UNKNOWN_LABEL.to_string()
            }
        }
    }

    /// Resolve all four relation-valued properties of one trade document.
    pub async fn resolve_document_relations(&self, doc: &RawDocument) -> ResolvedRelations {
        ResolvedRelations {
            confluences: self
                .resolve_labels(&mapper::relation_ids(doc, mapper::PROP_CONFLUENCES))
                .await,
            order_types: self
                .resolve_labels(&mapper::relation_ids(doc, mapper::PROP_ORDER_TYPE))
                .await,
            sessions: self
                .resolve_labels(&mapper::relation_ids(doc, mapper::PROP_SESSION))
                .await,
            mistakes: self
                .resolve_labels(&mapper::relation_ids(doc, mapper::PROP_MISTAKES))
                .await,
        }
    }
}
