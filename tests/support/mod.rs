//! Shared helpers: in-memory app and one-shot request plumbing.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use catalog_service::{app, connect_in_memory, AppState};
use serde_json::Value;
use tower::ServiceExt;

pub struct TestApp {
    pub state: AppState,
    pub router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Value,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = connect_in_memory().await.expect("in-memory store");
        let state = AppState::new(pool);
        let router = app(state.clone(), 64 * 1024);
        TestApp { state, router }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        match body {
            Some(v) => {
                let bytes = serde_json::to_vec(&v).unwrap();
                self.send(method, uri, Some("application/json"), Body::from(bytes)).await
            }
            None => self.send(method, uri, None, Body::empty()).await,
        }
    }

    /// Send `body` as is, with an optional `Content-Type`.
    pub async fn send_raw(&self, method: Method, uri: &str, content_type: Option<&str>, body: &str) -> TestResponse {
        self.send(method, uri, content_type, Body::from(body.to_string())).await
    }

    async fn send(&self, method: Method, uri: &str, content_type: Option<&str>, body: Body) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        let resp = self.router.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = resp.status();
        let location = resp
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
        };
        TestResponse { status, location, body }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }

    /// POST and return the id from the Location header.
    pub async fn create(&self, uri: &str, body: Value) -> i64 {
        let resp = self.post(uri, body).await;
        assert_eq!(resp.status, StatusCode::CREATED, "{:?}", resp.body);
        resp.location
            .and_then(|l| l.rsplit('/').next().and_then(|id| id.parse().ok()))
            .expect("Location with id")
    }

    pub async fn create_author(&self, first: &str, last: &str) -> i64 {
        self.create("/api/author", serde_json::json!({ "first_name": first, "last_name": last }))
            .await
    }

    pub async fn create_book(&self, title: &str, author_id: i64) -> i64 {
        self.create("/api/book", serde_json::json!({ "title": title, "author_id": author_id }))
            .await
    }
}
