//! JSON request bodies whose rejections use the [`AppError`] envelope.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde_json::Value;

/// Raw JSON body. Syntax errors, a missing `Content-Type: application/json`
/// and unreadable bodies are all 400 `bad_request`.
#[derive(Clone, Debug)]
pub struct JsonBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| AppError::BadRequest(e.body_text()))?;
        Ok(JsonBody(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, StatusCode};

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<Value, AppError> {
        let mut builder = axum::http::Request::builder().method("POST").uri("/api/author");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        let req = builder.body(Body::from(body)).unwrap();
        JsonBody::from_request(req, &()).await.map(|b| b.0)
    }

    #[tokio::test]
    async fn accepts_json() {
        let v = extract(Some("application/json"), r#"{"a":1}"#).await.unwrap();
        assert_eq!(v, serde_json::json!({ "a": 1 }));
    }

    #[tokio::test]
    async fn syntax_error_and_missing_content_type_are_bad_request() {
        for (ct, body) in [(Some("application/json"), "{not json"), (None, r#"{"a":1}"#)] {
            let err = extract(ct, body).await.unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)), "{err:?}");
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        }
    }
}
