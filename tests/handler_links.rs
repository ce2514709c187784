mod common;

use axum::{
    Router,
    routing::{delete, get},
};
use axum_test::TestServer;
use snaplink::api::handlers::{delete_link_handler, list_links_handler};

fn make_server(state: snaplink::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/links", get(list_links_handler))
        .route("/api/links/{code}", delete(delete_link_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

// ─── GET /api/links ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_empty() {
    let state = common::create_test_state();
    let server = make_server(state);

    let response = server.get("/api/links").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["count"], 0);
    assert!(body["links"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_contains_all_mappings() {
    let state = common::create_test_state();
    let code1 = common::create_test_link(&state, "https://one.example").await;
    let code2 = common::create_test_link(&state, "https://two.example").await;

    let server = make_server(state);
    let response = server.get("/api/links").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["count"], 2);

    // Order is unspecified; compare as a set of (code, url) pairs.
    let links = body["links"].as_array().unwrap();
    let mut pairs: Vec<(String, String)> = links
        .iter()
        .map(|l| {
            (
                l["code"].as_str().unwrap().to_string(),
                l["long_url"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    pairs.sort();

    let mut expected = vec![
        (code1, "https://one.example".to_string()),
        (code2, "https://two.example".to_string()),
    ];
    expected.sort();

    assert_eq!(pairs, expected);
}

#[tokio::test]
async fn test_list_renders_short_urls() {
    let state = common::create_test_state();
    let code = common::create_test_link(&state, "https://example.com").await;

    let server = make_server(state);
    let body = server.get("/api/links").await.json::<serde_json::Value>();

    assert_eq!(
        body["links"][0]["short_url"],
        format!("{}/{}", common::BASE_URL, code)
    );
}

// ─── DELETE /api/links/{code} ────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_link_success() {
    let state = common::create_test_state();
    let code = common::create_test_link(&state, "https://example.com").await;

    let server = make_server(state.clone());
    let response = server.delete(&format!("/api/links/{code}")).await;

    response.assert_status(axum::http::StatusCode::NO_CONTENT);
    assert_eq!(state.shortener.entry_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_link_not_found() {
    let state = common::create_test_state();
    let server = make_server(state);

    let response = server.delete("/api/links/nope42").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_link_twice() {
    let state = common::create_test_state();
    let code = common::create_test_link(&state, "https://example.com").await;

    let server = make_server(state);

    // First delete succeeds.
    server
        .delete(&format!("/api/links/{code}"))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    // Second delete returns 404 — already gone.
    server
        .delete(&format!("/api/links/{code}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_delete_nonexistent_leaves_registry_unchanged() {
    let state = common::create_test_state();
    common::create_test_link(&state, "https://example.com").await;

    let server = make_server(state.clone());
    server.delete("/api/links/nope42").await.assert_status_not_found();

    assert_eq!(state.shortener.entry_count().await.unwrap(), 1);
}
