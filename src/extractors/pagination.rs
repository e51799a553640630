//! Extract `page` / `per_page` query parameters into a [`PageRequest`].

use crate::error::AppError;
use crate::service::{PageRequest, DEFAULT_PAGE, DEFAULT_PER_PAGE};
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::collections::HashMap;

/// Validated pagination for list endpoints. Missing parameters take defaults;
/// anything unparsable or outside the allowed set is a 400.
#[derive(Clone, Copy, Debug)]
pub struct Pagination(pub PageRequest);

fn parse_param(params: &HashMap<String, String>, key: &str, default: u32) -> Result<u32, AppError> {
    match params.get(key).map(|s| s.trim()).filter(|s| !s.is_empty()) {
        None => Ok(default),
        Some(s) => s
            .parse()
            .map_err(|_| AppError::Validation(format!("{} must be a positive integer", key))),
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        let page = parse_param(&params, "page", DEFAULT_PAGE)?;
        let per_page = parse_param(&params, "per_page", DEFAULT_PER_PAGE)?;
        Ok(Pagination(PageRequest::new(page, per_page)?))
    }
}
