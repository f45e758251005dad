use crate::application::mapper;
use crate::application::resolver::{RelationResolver, UNKNOWN_LABEL};
use crate::domain::entities::trade::Trade;
use crate::domain::ports::clock::Clock;
use crate::domain::ports::document_store::{DocumentStore, StoreError};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};

struct CachedBatch {
    trades: Vec<Trade>,
    confluences: Vec<String>,
    populated_at: Instant,
}

/// Cached view of the historical trade batch.
///
/// Two states: empty (no batch) and populated (a complete batch plus the
/// sorted distinct confluence labels, sentinel excluded). A batch expires
/// `ttl` after population; `invalidate` empties the cache immediately.
/// Refills are single-flight: the `refill` mutex keeps at most one fetch in
/// flight, and concurrent cold callers wait for its result instead of each
/// hitting the store.
pub struct TradeHistory {
    store: Arc<dyn DocumentStore>,
    resolver: RelationResolver,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    cache: RwLock<Option<CachedBatch>>,
    refill: Mutex<()>,
}

impl TradeHistory {
    pub fn new(store: Arc<dyn DocumentStore>, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            resolver: RelationResolver::new(store.clone()),
            store,
            clock,
            ttl,
            cache: RwLock::new(None),
            refill: Mutex::new(()),
        }
    }

    /// The cached batch, refilled when empty or expired.
    ///
    /// Never fails: a refill that errors falls back to the previous complete
    /// batch, or to `[]` when none exists. The failure itself goes to the log.
    pub async fn historical_trades(&self) -> Vec<Trade> {
        self.batch().await.0
    }

    /// Sorted distinct confluence labels across the batch. The `"Unknown"`
    /// sentinel never appears here.
    pub async fn confluence_labels(&self) -> Vec<String> {
        self.batch().await.1
    }

    /// Drop the cached batch; the next read fetches fresh data.
    pub async fn invalidate(&self) {
        *self.cache.write().await = None;
    }

    async fn batch(&self) -> (Vec<Trade>, Vec<String>) {
        if let Some(b) = self.fresh().await {
            return b;
        }

        let _guard = self.refill.lock().await;
        // Another caller may have refilled while we waited for the guard.
        if let Some(b) = self.fresh().await {
            return b;
        }

        match self.fetch_batch().await {
            Ok((trades, confluences)) => {
                tracing::info!(trades = trades.len(), "trade cache refilled");
                *self.cache.write().await = Some(CachedBatch {
                    trades: trades.clone(),
                    confluences: confluences.clone(),
                    populated_at: self.clock.now(),
                });
                (trades, confluences)
            }
            Err(e) => {
                tracing::warn!("trade refill failed, serving previous batch: {e}");
                match &*self.cache.read().await {
                    Some(b) => (b.trades.clone(), b.confluences.clone()),
                    None => (Vec::new(), Vec::new()),
                }
            }
        }
    }

    async fn fresh(&self) -> Option<(Vec<Trade>, Vec<String>)> {
        let guard = self.cache.read().await;
        let b = guard.as_ref()?;
        if self.clock.now().duration_since(b.populated_at) < self.ttl {
            Some((b.trades.clone(), b.confluences.clone()))
        } else {
            None
        }
    }

    async fn fetch_batch(&self) -> Result<(Vec<Trade>, Vec<String>), StoreError> {
        let docs = self.store.query_all_documents().await?;

        let mut trades = Vec::with_capacity(docs.len());
        let mut labels = BTreeSet::new();
        for doc in &docs {
            let relations = self.resolver.resolve_document_relations(doc).await;
            for label in &relations.confluences {
                if label != UNKNOWN_LABEL {
                    labels.insert(label.clone());
                }
            }
            trades.push(mapper::map_document(doc, relations));
        }

        Ok((trades, labels.into_iter().collect()))
    }
}
