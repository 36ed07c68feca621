//! History paging and item endpoints

use crate::mock_server::{item_id, MockServerFixture};
use elevenlabs_lib_rust::history::DEFAULT_PAGE_SIZE;
use elevenlabs_lib_rust::{Error, HistoryQuery, RemoteErrorKind};
use mockito::Matcher;
use std::collections::HashSet;

#[tokio::test]
async fn test_twelve_items_in_pages_of_five() {
    let fixture = MockServerFixture::new().await;
    let mocks = vec![
        fixture.mock_history_page(12, 0, 5).await,
        fixture.mock_history_page(12, 5, 5).await,
        fixture.mock_history_page(12, 10, 5).await,
    ];
    let client = fixture.client();

    let mut page = client
        .get_history(&HistoryQuery::new().page_size(5))
        .await
        .unwrap();
    let mut sizes = vec![page.len()];
    let mut seen = HashSet::new();
    let mut order = Vec::new();
    for item in &page.items {
        assert!(seen.insert(item.history_item_id.clone()));
        order.push(item.history_item_id.clone());
    }

    while let Some(cursor) = page.cursor.take() {
        assert_eq!(cursor.page_size(), 5);
        page = cursor.fetch_next(&client).await.unwrap();
        sizes.push(page.len());
        for item in &page.items {
            assert!(
                seen.insert(item.history_item_id.clone()),
                "item {} returned twice",
                item.history_item_id
            );
            order.push(item.history_item_id.clone());
        }
    }

    assert_eq!(sizes, vec![5, 5, 2]);
    assert!(!page.has_more());
    assert_eq!(seen.len(), 12);
    // remote order is kept as-is
    assert_eq!(order, (0..12).map(item_id).collect::<Vec<_>>());
    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_page_size_override_affects_only_that_call() {
    let fixture = MockServerFixture::new().await;
    let _first = fixture.mock_history_page(12, 0, 5).await;
    let _second = fixture.mock_history_page(12, 5, 3).await;
    let _third = fixture.mock_history_page(12, 8, 3).await;
    let client = fixture.client();

    let first = client
        .get_history(&HistoryQuery::new().page_size(5))
        .await
        .unwrap();
    let cursor = first.cursor.clone().unwrap();

    let second = cursor.fetch_next_with_page_size(&client, 3).await.unwrap();
    assert_eq!(first.len(), 5);
    assert_eq!(second.len(), 3);
    assert_eq!(second.items[0].history_item_id, item_id(5));

    // the override carries over to the cursor it returned
    let next_cursor = second.cursor.clone().unwrap();
    assert_eq!(next_cursor.page_size(), 3);
    assert_eq!(next_cursor.start_after_history_item_id(), item_id(7));
    let third = next_cursor.fetch_next(&client).await.unwrap();
    assert_eq!(third.len(), 3);

    // the earlier page is untouched
    assert_eq!(first.items.len(), 5);
    assert_eq!(first.cursor.unwrap().page_size(), 5);
}

#[tokio::test]
async fn test_default_page_size_is_applied() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_history_page(3, 0, DEFAULT_PAGE_SIZE as usize)
        .await;

    let page = fixture
        .client()
        .get_history(&HistoryQuery::new())
        .await
        .unwrap();

    assert_eq!(page.len(), 3);
    assert!(page.cursor.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_history() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json(
            "GET",
            "/v1/history",
            r#"{"history":[],"last_history_item_id":null,"has_more":false}"#,
        )
        .await;

    let page = fixture
        .client()
        .get_history(&HistoryQuery::new().page_size(10))
        .await
        .unwrap();
    assert!(page.is_empty());
    assert!(page.cursor.is_none());
}

#[tokio::test]
async fn test_history_item_operations() {
    let fixture = MockServerFixture::new().await;
    let get = fixture
        .mock_json(
            "GET",
            "/v1/history/item-01",
            r#"{"history_item_id":"item-01","text":"hello","date_unix":1700000000,
                "character_count_change_from":0,"character_count_change_to":5}"#,
        )
        .await;
    let audio = fixture
        .mock_audio("GET", "/v1/history/item-01/audio", b"MP3DATA")
        .await;
    let delete = fixture
        .mock_json("DELETE", "/v1/history/item-01", r#"{"status":"ok"}"#)
        .await;

    let client = fixture.client();
    let item = client.get_history_item("item-01").await.unwrap();
    assert_eq!(item.text, "hello");
    assert_eq!(item.character_count(), 5);

    let bytes = client.get_history_item_audio("item-01").await.unwrap();
    assert_eq!(bytes.as_ref(), b"MP3DATA");

    client.delete_history_item("item-01").await.unwrap();

    get.assert_async().await;
    audio.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_download_history_audio() {
    let fixture = MockServerFixture::new().await;
    let mock = {
        let mut server = fixture.server.lock().await;
        server
            .mock("POST", "/v1/history/download")
            .match_header("xi-api-key", "test-key")
            .match_body(Matcher::Json(serde_json::json!({
                "history_item_ids": ["item-01", "item-02"]
            })))
            .with_status(200)
            .with_header("content-type", "application/zip")
            .with_body(b"PK\x03\x04")
            .create_async()
            .await
    };

    let bytes = fixture
        .client()
        .download_history_audio(&["item-01", "item-02"])
        .await
        .unwrap();
    assert_eq!(bytes.as_ref(), b"PK\x03\x04");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_download_requires_ids() {
    let fixture = MockServerFixture::new().await;
    let never = fixture.mock_unreachable("POST", Matcher::Any).await;

    let ids: [&str; 0] = [];
    let err = fixture
        .client()
        .download_history_audio(&ids)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    never.assert_async().await;
}

#[tokio::test]
async fn test_missing_history_item() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_error(
            "GET",
            "/v1/history/gone",
            404,
            r#"{"detail":{"status":"history_item_not_found","message":"History item gone not found"}}"#,
        )
        .await;

    let err = fixture.client().get_history_item("gone").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.remote_kind(), Some(RemoteErrorKind::NotFound));
}
