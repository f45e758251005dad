//! Tests for the RelationResolver — reference-to-label resolution.

mod common;

use common::{title_page, FakeStore};
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tradelens::application::resolver::RelationResolver;
use tradelens::domain::ports::document_store::RawDocument;

fn ids(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_empty_input_performs_no_io() {
    let store = Arc::new(FakeStore::new());
    let resolver = RelationResolver::new(store.clone());

    let labels = resolver.resolve_labels(&[]).await;

    assert!(labels.is_empty());
    assert_eq!(
        store.page_calls.load(Ordering::SeqCst),
        0,
        "Empty input must not hit the store"
    );
}

#[tokio::test]
async fn test_all_references_resolve_in_order() {
    let store = Arc::new(FakeStore::new());
    store.add_page(title_page("a", "H4 trend"));
    store.add_page(title_page("b", "Pattern break"));
    let resolver = RelationResolver::new(store);

    let labels = resolver.resolve_labels(&ids(&["a", "b"])).await;
    assert_eq!(labels, vec!["H4 trend", "Pattern break"]);
}

#[tokio::test]
async fn test_failing_lookup_yields_unknown_at_its_position() {
    let store = Arc::new(FakeStore::new());
    store.add_page(title_page("a", "H4 trend"));
    store.add_page(title_page("c", "Pattern break"));
    let resolver = RelationResolver::new(store);

    // "b" does not exist; its slot becomes the sentinel, neighbors keep order.
    let labels = resolver.resolve_labels(&ids(&["a", "b", "c"])).await;
    assert_eq!(labels, vec!["H4 trend", "Unknown", "Pattern break"]);
}

#[tokio::test]
async fn test_page_without_title_property_yields_unknown() {
    let store = Arc::new(FakeStore::new());
    store.add_page(RawDocument {
        id: "x".into(),
        properties: json!({"Price": {"type": "number", "number": 5}}),
    });
    let resolver = RelationResolver::new(store);

    let labels = resolver.resolve_labels(&ids(&["x"])).await;
    assert_eq!(labels, vec!["Unknown"]);
}

#[tokio::test]
async fn test_duplicate_references_each_resolve() {
    let store = Arc::new(FakeStore::new());
    store.add_page(title_page("a", "London open"));
    let resolver = RelationResolver::new(store);

    let labels = resolver.resolve_labels(&ids(&["a", "a"])).await;
    assert_eq!(labels, vec!["London open", "London open"]);
}
