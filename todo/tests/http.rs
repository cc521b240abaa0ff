//! End-to-end tests over the router with an in-process test server.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use serde_json::json;
use std::sync::Arc;
use todo::server::{build_router, AppState};
use todo::{Filter, TodoStore};

fn server_with_store() -> (TestServer, Arc<TodoStore>) {
    let store = Arc::new(TodoStore::new());
    let server = TestServer::new(build_router(AppState::new(Arc::clone(&store)))).unwrap();
    (server, store)
}

fn trigger(response: &TestResponse) -> Option<String> {
    response
        .headers()
        .get("hx-trigger")
        .map(|value| value.to_str().unwrap().to_string())
}

fn error_code(response: &TestResponse) -> Option<String> {
    response
        .headers()
        .get("x-error-code")
        .map(|value| value.to_str().unwrap().to_string())
}

async fn add(server: &TestServer, label: &str) -> TestResponse {
    server.post("/todos").json(&json!({ "todo": label })).await
}

#[tokio::test]
async fn index_resets_and_serves_page() {
    let (server, store) = server_with_store();
    store.add_item("stale").await.unwrap();
    store.set_filter(Filter::Completed).await.unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(!html.contains("stale"));
    assert_eq!(store.summary().await, todo::FilterState::default());
}

#[tokio::test]
async fn add_returns_list_and_triggers_refresh() {
    let (server, store) = server_with_store();

    let response = add(&server, "Buy milk").await;

    response.assert_status_ok();
    assert!(response.text().contains("Buy milk"));
    assert_eq!(trigger(&response).as_deref(), Some("todos-changed"));
    assert_eq!(store.summary().await.total_count, 1);
}

#[tokio::test]
async fn add_with_undecodable_body_adds_empty_item() {
    let (server, store) = server_with_store();

    let response = server.post("/todos").text("not json").await;

    response.assert_status_ok();
    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.items()[0].label, "");
}

#[tokio::test]
async fn toggle_marks_item_completed() {
    let (server, store) = server_with_store();
    add(&server, "A").await;

    let response = server.put("/todos/toggle/0").await;

    response.assert_status_ok();
    assert!(response.text().contains(r#"class="completed""#));
    assert_eq!(trigger(&response).as_deref(), Some("todos-changed"));
    assert_eq!(store.summary().await.active_count, 0);
}

#[tokio::test]
async fn delete_reindexes_remaining_items() {
    let (server, store) = server_with_store();
    add(&server, "A").await;
    add(&server, "B").await;

    let response = server.delete("/todos/0").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(!html.contains(">A<"));
    assert!(html.contains(r#"hx-delete="/todos/0""#));
    assert!(!html.contains(r#"hx-delete="/todos/1""#));
    assert_eq!(store.snapshot().await.items()[0].label, "B");
}

#[tokio::test]
async fn out_of_range_position_is_not_found() {
    let (server, store) = server_with_store();
    add(&server, "A").await;
    let before = store.snapshot().await;

    for response in [
        server.put("/todos/toggle/1").await,
        server.delete("/todos/5").await,
        server.get("/todos/edit/1").await,
        server.put("/todos/edit/1").json(&json!({ "todo": "x" })).await,
    ] {
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(error_code(&response).as_deref(), Some("OUT_OF_RANGE"));
        assert_eq!(trigger(&response), None);
    }

    assert_eq!(store.snapshot().await, before);
}

#[tokio::test]
async fn malformed_position_is_not_found() {
    let (server, store) = server_with_store();
    add(&server, "A").await;
    add(&server, "B").await;
    let before = store.snapshot().await;

    for path in ["/todos/-1", "/todos/abc", "/todos/+1", "/todos/99999999999999999999999"] {
        let response = server.delete(path).await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(error_code(&response).as_deref(), Some("OUT_OF_RANGE"));
    }

    assert_eq!(store.snapshot().await, before);
}

#[tokio::test]
async fn edit_begin_then_commit() {
    let (server, store) = server_with_store();
    add(&server, "Draft").await;

    let opened = server.get("/todos/edit/0").await;
    opened.assert_status_ok();
    assert!(opened.text().contains(r#"class="edit""#));
    assert_eq!(trigger(&opened), None);

    let committed = server
        .put("/todos/edit/0")
        .json(&json!({ "todo": "Final" }))
        .await;
    committed.assert_status_ok();
    assert!(committed.text().contains("Final"));

    let item = store.snapshot().await.items()[0].clone();
    assert_eq!(item.label, "Final");
    assert!(!item.editing);
}

#[tokio::test]
async fn commit_with_undecodable_body_keeps_label() {
    let (server, store) = server_with_store();
    add(&server, "Keep me").await;
    server.get("/todos/edit/0").await;

    let response = server.put("/todos/edit/0").text("{").await;

    response.assert_status_ok();
    let item = store.snapshot().await.items()[0].clone();
    assert_eq!(item.label, "Keep me");
    assert!(!item.editing);
}

#[tokio::test]
async fn filter_switches_view_and_triggers_footer() {
    let (server, store) = server_with_store();
    add(&server, "A").await;
    add(&server, "B").await;
    server.put("/todos/toggle/1").await;

    let response = server.post("/footer/completed").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(">B<"));
    assert!(!html.contains(">A<"));
    assert_eq!(trigger(&response).as_deref(), Some("filter-changed"));
    assert_eq!(store.summary().await.current_filter, Filter::Completed);

    let footer = server.get("/footer").await;
    footer.assert_status_ok();
    assert!(footer.text().contains(r#"class="selected""#));
    assert!(footer.text().contains("<strong>1</strong> item left"));
}

#[tokio::test]
async fn unknown_filter_selects_all() {
    let (server, store) = server_with_store();
    store.set_filter(Filter::Active).await.unwrap();

    server.post("/footer/bogus").await.assert_status_ok();

    assert_eq!(store.summary().await.current_filter, Filter::All);
}

#[tokio::test]
async fn clear_completed_removes_checked_items() {
    let (server, store) = server_with_store();
    add(&server, "A").await;
    add(&server, "B").await;
    server.put("/todos/toggle/0").await;

    let response = server.delete("/footer").await;

    response.assert_status_ok();
    assert_eq!(trigger(&response).as_deref(), Some("todos-changed"));
    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.items()[0].label, "B");
    assert_eq!(snapshot.items()[0].position, 0);

    let again = server.delete("/footer").await;
    again.assert_status_ok();
    assert_eq!(trigger(&again), None);
}

#[tokio::test]
async fn stylesheet_and_health() {
    let (server, _) = server_with_store();

    let css = server.get("/css/output.css").await;
    css.assert_status_ok();
    assert!(css
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/css"));

    let health = server.get("/health").await;
    health.assert_status_ok();
    health.assert_text("ok");
}

#[tokio::test]
async fn metrics_without_recorder_is_unavailable() {
    let (server, _) = server_with_store();

    server
        .get("/metrics")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}
