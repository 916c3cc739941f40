mod common;

#[tokio::test]
async fn test_index_empty() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("urlInput"));
    assert!(html.contains("id=\"urlList\""));
}

#[tokio::test]
async fn test_index_lists_records_newest_first() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let older = common::create_test_link(&state, "https://older.example").await;
    let newer = common::create_test_link(&state, "https://newer.example").await;

    let html = server.get("/").await.text();

    let older_pos = html.find("older.example").unwrap();
    let newer_pos = html.find("newer.example").unwrap();
    assert!(newer_pos < older_pos);

    assert!(html.contains(&format!("data-delete=\"{}\"", older.id)));
    assert!(html.contains(&format!("data-copy=\"{}\"", newer.short)));
}

#[tokio::test]
async fn test_index_marks_expired_records() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    common::create_expired_link(&state, "https://gone.example").await;

    let html = server.get("/").await.text();

    assert!(html.contains("gone.example"));
    assert!(html.contains("(expired)"));
}

#[tokio::test]
async fn test_index_escapes_original() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    common::create_test_link(&state, "https://example.com/?q=<b>bold</b>").await;

    let html = server.get("/").await.text();

    assert!(!html.contains("<b>bold</b>"));
    assert!(html.contains("bold&"));
}
