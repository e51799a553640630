//! Catalog routes under /api.

use crate::handlers::{
    create_author, create_book, delete_author, delete_book, get_author, get_book, list_authors, list_books,
    list_statistics, update_author, update_book,
};
use crate::openapi::ApiDoc;
use crate::state::AppState;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/book", get(list_books).post(create_book))
        .route("/api/book/:id", get(get_book).put(update_book).delete(delete_book))
        .route("/api/author", get(list_authors).post(create_author))
        .route("/api/author/:id", get(get_author).put(update_author).delete(delete_author))
        .route("/api/statistics", get(list_statistics))
        .route("/api/openapi.json", get(openapi_json))
        .with_state(state)
}
