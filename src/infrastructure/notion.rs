use crate::domain::ports::document_store::{DocumentStore, RawDocument, StoreError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const NOTION_VERSION: &str = "2022-06-28";

/// Notion-backed document store. The trade journal lives in one database;
/// relation targets (confluence/session/order-type/mistake pages) are fetched
/// individually by id.
pub struct NotionStore {
    client: Client,
    token: String,
    database_id: String,
    base_url: String,
}

#[derive(Serialize)]
struct QueryRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    start_cursor: Option<&'a str>,
}

#[derive(Deserialize)]
struct QueryResponse {
    results: Vec<RawDocument>,
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    next_cursor: Option<String>,
}

impl NotionStore {
    pub fn new(token: String, database_id: String, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent("tradelens/0.1")
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            token,
            database_id,
            base_url: "https://api.notion.com/v1".into(),
        }
    }
}

#[async_trait::async_trait]
impl DocumentStore for NotionStore {
    /// Query the whole journal database, following cursor pagination until
    /// the result set is complete.
    async fn query_all_documents(&self) -> Result<Vec<RawDocument>, StoreError> {
        let mut documents = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let resp = self
                .client
                .post(format!(
                    "{}/databases/{}/query",
                    self.base_url, self.database_id
                ))
                .bearer_auth(&self.token)
                .header("Notion-Version", NOTION_VERSION)
                .json(&QueryRequest {
                    start_cursor: cursor.as_deref(),
                })
                .send()
                .await
                .map_err(|e| StoreError::Network(e.to_string()))?;

            if !resp.status().is_success() {
                return Err(StoreError::Network(format!(
                    "database query returned {}",
                    resp.status()
                )));
            }

            let page: QueryResponse = resp
                .json()
                .await
                .map_err(|e| StoreError::Parse(e.to_string()))?;
            documents.extend(page.results);

            match (page.has_more, page.next_cursor) {
                (true, Some(next)) => cursor = Some(next),
                _ => break,
            }
        }

        Ok(documents)
    }

    async fn get_document(&self, id: &str) -> Result<RawDocument, StoreError> {
        let resp = self
            .client
            .get(format!("{}/pages/{id}", self.base_url))
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(id.to_string()));
        }
        if !resp.status().is_success() {
            return Err(StoreError::Network(format!(
                "page fetch returned {}",
                resp.status()
            )));
        }

        resp.json()
            .await
            .map_err(|e| StoreError::Parse(e.to_string()))
    }
}
