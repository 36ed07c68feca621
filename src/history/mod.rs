//! Generation history: paging, per-item lookups and audio downloads.
//!
//! ```rust,no_run
//! use elevenlabs_lib_rust::{ElevenLabsClient, HistoryQuery};
//!
//! # async fn run(client: ElevenLabsClient) -> elevenlabs_lib_rust::Result<()> {
//! let mut page = client.get_history(&HistoryQuery::new().page_size(5)).await?;
//! loop {
//!     for item in &page.items {
//!         println!("{} {}", item.history_item_id, item.text_len());
//!     }
//!     match page.cursor.take() {
//!         Some(cursor) => page = cursor.fetch_next(&client).await?,
//!         None => break,
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod types;

pub use types::{
    HistoryCursor, HistoryItem, HistoryPage, HistoryQuery, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
