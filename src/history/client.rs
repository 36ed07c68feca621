//! History calls on [`ElevenLabsClient`].

use super::types::{clamp_page_size, HistoryCursor, HistoryItem, HistoryPage, HistoryQuery, HistoryResponse};
use crate::client::core::require_id;
use crate::{ElevenLabsClient, Error, ErrorContext, Result};
use bytes::Bytes;
use reqwest::Method;
use tracing::debug;

impl ElevenLabsClient {
    /// Fetch the first page of the generation history.
    ///
    /// Items come in the order the service returns them (newest first).
    pub async fn get_history(&self, query: &HistoryQuery) -> Result<HistoryPage> {
        let start_after = query
            .start_after_history_item_id
            .as_deref()
            .filter(|id| !id.trim().is_empty());
        self.fetch_history_page(query.effective_page_size(), start_after)
            .await
    }

    async fn fetch_history_page(
        &self,
        page_size: u32,
        start_after: Option<&str>,
    ) -> Result<HistoryPage> {
        let url = self.transport.url(&["v1", "history"])?;
        let mut query = vec![("page_size", page_size.to_string())];
        if let Some(id) = start_after {
            query.push(("start_after_history_item_id", id.to_string()));
        }

        debug!(page_size, start_after = ?start_after, "history page request");
        let req = self.transport.request(Method::GET, url).query(&query);
        let response: HistoryResponse = self.transport.send_json(req).await?;
        let page = HistoryPage::from_response(response, page_size);
        debug!(items = page.len(), has_more = page.has_more(), "history page received");
        Ok(page)
    }

    pub async fn get_history_item(&self, history_item_id: &str) -> Result<HistoryItem> {
        let id = require_id("history_item_id", history_item_id)?;
        let url = self.transport.url(&["v1", "history", id])?;
        self.transport
            .send_json(self.transport.request(Method::GET, url))
            .await
    }

    pub async fn delete_history_item(&self, history_item_id: &str) -> Result<()> {
        let id = require_id("history_item_id", history_item_id)?;
        let url = self.transport.url(&["v1", "history", id])?;
        self.transport
            .send_empty(self.transport.request(Method::DELETE, url))
            .await
    }

    /// Audio generated for one history item.
    pub async fn get_history_item_audio(&self, history_item_id: &str) -> Result<Bytes> {
        let id = require_id("history_item_id", history_item_id)?;
        let url = self.transport.url(&["v1", "history", id, "audio"])?;
        self.transport
            .send_bytes(self.transport.request(Method::GET, url))
            .await
    }

    /// Download several history items at once.
    ///
    /// A single id yields the audio file itself; several ids yield a zip archive.
    pub async fn download_history_audio<S: AsRef<str>>(
        &self,
        history_item_ids: &[S],
    ) -> Result<Bytes> {
        let ids = history_item_ids
            .iter()
            .map(|id| require_id("history_item_ids", id.as_ref()).map(str::to_string))
            .collect::<Result<Vec<_>>>()?;
        if ids.is_empty() {
            return Err(Error::validation_with_context(
                "at least one history item id is required",
                ErrorContext::new()
                    .with_field_path("history_item_ids")
                    .with_source("history"),
            ));
        }

        let url = self.transport.url(&["v1", "history", "download"])?;
        debug!(count = ids.len(), "history download request");
        let req = self
            .transport
            .request(Method::POST, url)
            .json(&serde_json::json!({ "history_item_ids": ids }));
        self.transport.send_bytes(req).await
    }
}

impl HistoryCursor {
    /// Fetch the next page with the page size this cursor carries.
    pub async fn fetch_next(self, client: &ElevenLabsClient) -> Result<HistoryPage> {
        let page_size = self.page_size;
        self.fetch_next_with_page_size(client, page_size).await
    }

    /// Fetch the next page with a different page size.
    ///
    /// The override sticks to the returned cursor; pages already fetched are
    /// unaffected.
    pub async fn fetch_next_with_page_size(
        self,
        client: &ElevenLabsClient,
        page_size: u32,
    ) -> Result<HistoryPage> {
        client
            .fetch_history_page(
                clamp_page_size(Some(page_size)),
                Some(&self.start_after_history_item_id),
            )
            .await
    }
}
