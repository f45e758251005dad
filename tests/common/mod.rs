//! Shared test helpers: in-memory store, canned completion, manual clock.
#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tradelens::domain::ports::clock::Clock;
use tradelens::domain::ports::completion::{CompletionError, CompletionProvider};
use tradelens::domain::ports::document_store::{DocumentStore, RawDocument, StoreError};
use tradelens::TradeLens;

/// In-memory document store with failure injection and call counters.
pub struct FakeStore {
    batch: Mutex<Vec<RawDocument>>,
    pages: Mutex<HashMap<String, RawDocument>>,
    fail_query: Mutex<bool>,
    query_delay: Mutex<Duration>,
    pub query_calls: AtomicUsize,
    pub page_calls: AtomicUsize,
}

impl FakeStore {
    pub fn new() -> Self {
        Self {
            batch: Mutex::new(Vec::new()),
            pages: Mutex::new(HashMap::new()),
            fail_query: Mutex::new(false),
            query_delay: Mutex::new(Duration::ZERO),
            query_calls: AtomicUsize::new(0),
            page_calls: AtomicUsize::new(0),
        }
    }

    pub fn set_batch(&self, docs: Vec<RawDocument>) {
        *self.batch.lock().unwrap() = docs;
    }

    pub fn add_page(&self, page: RawDocument) {
        self.pages.lock().unwrap().insert(page.id.clone(), page);
    }

    pub fn fail_queries(&self, fail: bool) {
        *self.fail_query.lock().unwrap() = fail;
    }

    /// Stretch query latency so concurrent callers overlap.
    pub fn set_query_delay(&self, delay: Duration) {
        *self.query_delay.lock().unwrap() = delay;
    }
}

#[async_trait]
impl DocumentStore for FakeStore {
    async fn query_all_documents(&self) -> Result<Vec<RawDocument>, StoreError> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.query_delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if *self.fail_query.lock().unwrap() {
            return Err(StoreError::Network("injected query failure".into()));
        }
        Ok(self.batch.lock().unwrap().clone())
    }

    async fn get_document(&self, id: &str) -> Result<RawDocument, StoreError> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);
        self.pages
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

/// Completion provider that records prompts and returns a fixed reply.
pub struct CannedCompletion {
    reply: String,
    fail: Mutex<bool>,
    pub prompts: Mutex<Vec<String>>,
}

impl CannedCompletion {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            fail: Mutex::new(false),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn fail_completions(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionProvider for CannedCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if *self.fail.lock().unwrap() {
            return Err(CompletionError::Network("injected completion failure".into()));
        }
        Ok(self.reply.clone())
    }
}

/// Clock that only moves when told to.
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    pub fn advance(&self, d: Duration) {
        *self.now.lock().unwrap() += d;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }
}

pub struct TestEnv {
    pub store: Arc<FakeStore>,
    pub completion: Arc<CannedCompletion>,
    pub clock: Arc<ManualClock>,
    pub app: TradeLens,
}

pub fn setup() -> TestEnv {
    setup_with_ttl(Duration::from_secs(600))
}

pub fn setup_with_ttl(ttl: Duration) -> TestEnv {
    let store = Arc::new(FakeStore::new());
    let completion = Arc::new(CannedCompletion::new("canned analysis"));
    let clock = Arc::new(ManualClock::new());
    let app = TradeLens::with_providers(store.clone(), completion.clone(), clock.clone(), ttl);
    TestEnv {
        store,
        completion,
        clock,
        app,
    }
}

/// A trade document with the given properties bag.
pub fn trade_doc(id: &str, properties: serde_json::Value) -> RawDocument {
    RawDocument {
        id: id.to_string(),
        properties,
    }
}

/// A relation target page whose title property carries the label.
pub fn title_page(id: &str, title: &str) -> RawDocument {
    RawDocument {
        id: id.to_string(),
        properties: json!({
            "Name": {"type": "title", "title": [{"plain_text": title}]}
        }),
    }
}
