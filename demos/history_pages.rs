//! Walk the whole generation history, five items per page
//!
//! Usage:
//!   ELEVENLABS_API_KEY=your_key cargo run --example history_pages

use elevenlabs_lib_rust::{ElevenLabsClient, HistoryPage, HistoryQuery};
use tracing_subscriber::EnvFilter;

fn print_page(page: &HistoryPage, number: usize, first_index: usize) {
    println!("--Page {}--", number);
    for (i, item) in page.items.iter().enumerate() {
        println!(
            "{}. {} - {}: {} bytes",
            first_index + i,
            item.date_unix,
            item.history_item_id,
            item.text_len()
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = ElevenLabsClient::from_env()?;

    let mut number = 1;
    let mut seen = 0;
    let mut page = client
        .get_history(&HistoryQuery::new().page_size(5))
        .await?;
    print_page(&page, number, seen + 1);
    seen += page.len();

    // The cursor keeps the page size of the first call unless a new one is given.
    while let Some(cursor) = page.cursor.take() {
        number += 1;
        page = cursor.fetch_next(&client).await?;
        print_page(&page, number, seen + 1);
        seen += page.len();
    }

    println!("{} items in {} pages", seen, number);
    Ok(())
}
