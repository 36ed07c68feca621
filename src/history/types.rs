//! History types.

use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Page size used when none is given.
pub const DEFAULT_PAGE_SIZE: u32 = 100;
/// Largest page the service accepts.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// One generation stored in the account history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub history_item_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(default)]
    pub text: String,
    /// Seconds since the Unix epoch.
    pub date_unix: i64,
    #[serde(default)]
    pub character_count_change_from: i64,
    #[serde(default)]
    pub character_count_change_to: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<serde_json::Value>,
}

impl HistoryItem {
    pub fn created_at(&self) -> SystemTime {
        if self.date_unix >= 0 {
            UNIX_EPOCH + Duration::from_secs(self.date_unix as u64)
        } else {
            UNIX_EPOCH - Duration::from_secs(self.date_unix.unsigned_abs())
        }
    }

    /// Length of the source text in bytes.
    pub fn text_len(&self) -> usize {
        self.text.len()
    }

    /// Characters billed for this generation.
    pub fn character_count(&self) -> i64 {
        self.character_count_change_to - self.character_count_change_from
    }
}

/// Wire shape of `GET /v1/history`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct HistoryResponse {
    #[serde(default)]
    pub history: Vec<HistoryItem>,
    #[serde(default)]
    pub last_history_item_id: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// Options for the first history request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryQuery {
    pub page_size: Option<u32>,
    /// Resume after this item instead of starting at the newest one.
    pub start_after_history_item_id: Option<String>,
}

impl HistoryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn start_after(mut self, history_item_id: impl Into<String>) -> Self {
        self.start_after_history_item_id = Some(history_item_id.into());
        self
    }

    pub(crate) fn effective_page_size(&self) -> u32 {
        clamp_page_size(self.page_size)
    }
}

pub(crate) fn clamp_page_size(page_size: Option<u32>) -> u32 {
    page_size
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE)
}

/// Handle on the page that follows the one it came with.
///
/// It carries the last item id seen and the page size in effect. Fetching
/// consumes it; clone it first to fetch the same page twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryCursor {
    pub(crate) start_after_history_item_id: String,
    pub(crate) page_size: u32,
}

impl HistoryCursor {
    pub fn start_after_history_item_id(&self) -> &str {
        &self.start_after_history_item_id
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

/// One page of history plus the cursor for the next page.
///
/// `cursor` is `None` once the service reports no further items.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPage {
    pub items: Vec<HistoryItem>,
    pub cursor: Option<HistoryCursor>,
}

impl HistoryPage {
    pub(crate) fn from_response(response: HistoryResponse, page_size: u32) -> Self {
        let cursor = match (response.has_more, response.last_history_item_id) {
            (true, Some(last)) if !last.is_empty() && !response.history.is_empty() => {
                Some(HistoryCursor {
                    start_after_history_item_id: last,
                    page_size,
                })
            }
            _ => None,
        };
        Self {
            items: response.history,
            cursor,
        }
    }

    pub fn has_more(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
