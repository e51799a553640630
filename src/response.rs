//! Response helpers for writes, which carry no body.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// 201 with an empty body and a `Location` pointing at the new resource.
pub fn created(collection: &str, id: i64) -> Response {
    let location = format!("/api/{}/{}", collection, id);
    (StatusCode::CREATED, [(header::LOCATION, location)]).into_response()
}

pub fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_sets_location() {
        let resp = created("book", 12);
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(resp.headers()[header::LOCATION], "/api/book/12");
    }
}
