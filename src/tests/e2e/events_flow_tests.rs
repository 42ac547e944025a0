use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::state::AppState;

async fn post_event(app: &Router, body: &'static str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(
            Request::post("/post_event")
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn list_events(app: &Router) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::get("/events_list").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn appends_then_lists_events_in_order() {
    let app = router(AppState::in_memory());

    assert_eq!(
        post_event(&app, r#"{"name":"A"}"#).await,
        (StatusCode::CREATED, "Event Created!".to_string())
    );
    assert_eq!(
        post_event(&app, r#"{"name":"B"}"#).await,
        (StatusCode::CREATED, "Event Created!".to_string())
    );

    let (status, events) = list_events(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(events, json!([{"name": "A"}, {"name": "B"}]));
}

#[tokio::test]
async fn isolated_states_do_not_share_events() {
    let first = router(AppState::in_memory());
    let second = router(AppState::in_memory());

    post_event(&first, r#"{"name":"A"}"#).await;

    assert_eq!(list_events(&first).await.1, json!([{"name": "A"}]));
    assert_eq!(list_events(&second).await.1, json!([]));
}

#[tokio::test]
async fn listing_does_not_mutate_the_store() {
    let app = router(AppState::in_memory());
    post_event(&app, r#"{"name":"A"}"#).await;

    let (_, first) = list_events(&app).await;
    let (_, second) = list_events(&app).await;

    assert_eq!(first, second);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_appends_are_all_kept() {
    let app = router(AppState::in_memory());

    let tasks: Vec<_> = (0..50)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move { post_event(&app, r#"{"name":"X"}"#).await })
        })
        .collect();
    for task in tasks {
        assert_eq!(task.await.unwrap().0, StatusCode::CREATED);
    }

    let (_, events) = list_events(&app).await;
    assert_eq!(events.as_array().unwrap().len(), 50);
}

#[tokio::test]
async fn lists_object_keys_in_the_order_they_were_posted() {
    let app = router(AppState::in_memory());
    post_event(&app, r#"{"name":"A","date":"x"}"#).await;

    let response = app
        .oneshot(Request::get("/events_list").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    assert_eq!(&bytes[..], br#"[{"name":"A","date":"x"}]"#);
}

#[tokio::test]
async fn accepts_bodies_larger_than_the_default_extractor_limit() {
    let app = router(AppState::in_memory());
    let payload = format!("\"{}\"", "x".repeat(3 * 1024 * 1024));

    let response = app
        .clone()
        .oneshot(
            Request::post("/post_event")
                .header("content-type", "application/json")
                .body(Body::from(payload))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let (_, events) = list_events(&app).await;
    assert_eq!(events[0].as_str().unwrap().len(), 3 * 1024 * 1024);
}

#[tokio::test]
async fn serves_graphiql_on_get() {
    let response = router(AppState::in_memory())
        .oneshot(Request::get("/gql").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("/gql"));
}
