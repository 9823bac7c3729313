#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{
    header::{CONTENT_LENGTH, CONTENT_TYPE},
    Method, Request, StatusCode,
};
use axum::Router;
use http_body_util::BodyExt;
use item_service::{app, AppState, EventSink, ServerConfig, SqliteItemStore};
use serde_json::Value;
use tower::ServiceExt;

/// Fresh in-memory store with an empty `items` table.
pub async fn test_store() -> SqliteItemStore {
    SqliteItemStore::in_memory().await.unwrap()
}

/// Full router over `store`, with events captured by the returned sink.
pub fn build_test_app(store: SqliteItemStore) -> (Router, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let state = AppState::new(store).with_events(sink.clone());
    (app(state, &ServerConfig::default()), sink)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<(Level, String)>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<(Level, String)> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, level: Level, message: &str) {
        self.events.lock().unwrap().push((level, message.to_string()));
    }
}

impl EventSink for RecordingSink {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}

/// Send a request and decode the JSON response (`Value::Null` for an empty body).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    into_json(app.clone().oneshot(request).await.unwrap()).await
}

/// Send a raw body as `application/json`, for malformed-payload cases.
pub async fn send_raw(app: &Router, method: Method, uri: &str, raw: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(raw.to_string()))
        .unwrap();
    into_json(app.clone().oneshot(request).await.unwrap()).await
}

/// Like [`send_raw`], with an explicit `Content-Length` header.
pub async fn send_sized(app: &Router, method: Method, uri: &str, raw: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(CONTENT_LENGTH, raw.len())
        .body(Body::from(raw.to_string()))
        .unwrap();
    into_json(app.clone().oneshot(request).await.unwrap()).await
}

async fn into_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn list(app: &Router) -> Vec<Value> {
    let (status, json) = send(app, Method::GET, "/items", None).await;
    assert_eq!(status, StatusCode::OK);
    json.as_array().cloned().unwrap()
}

pub async fn create(app: &Router, name: &str) -> Value {
    let (status, json) = send(app, Method::POST, "/items", Some(serde_json::json!({ "item": name }))).await;
    assert_eq!(status, StatusCode::CREATED);
    json
}
