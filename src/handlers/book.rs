//! Book handlers: list (paginated), create, read, update, delete.

use crate::error::AppError;
use crate::extractors::{JsonBody, Pagination};
use crate::handlers::parse_id;
use crate::model::{BookPage, BookUpdate, BookView, NewBook};
use crate::response::{created, no_content};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};

#[utoipa::path(
    get,
    path = "/api/book",
    tag = "book",
    params(
        ("page" = Option<u32>, Query, description = "1-based page number, default 1"),
        ("per_page" = Option<u32>, Query, description = "One of 2, 10, 30, 40, 50; default 10"),
    ),
    responses(
        (status = 200, description = "Page of books", body = BookPage),
        (status = 400, description = "Invalid page or per_page"),
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Pagination(req): Pagination,
) -> Result<Json<BookPage>, AppError> {
    Ok(Json(state.catalog.list_books(req).await?))
}

#[utoipa::path(
    post,
    path = "/api/book",
    tag = "book",
    request_body = NewBook,
    responses(
        (status = 201, description = "Book created"),
        (status = 400, description = "Missing or malformed field"),
        (status = 404, description = "Author not found"),
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Response, AppError> {
    let input = RequestValidator::new_book(body)?;
    let id = state.catalog.create_book(&input).await?;
    Ok(created("book", id))
}

#[utoipa::path(
    get,
    path = "/api/book/{id}",
    tag = "book",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book", body = BookView),
        (status = 404, description = "Book not found"),
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<BookView>, AppError> {
    let id = parse_id(&id_str)?;
    Ok(Json(state.catalog.get_book(id).await?))
}

#[utoipa::path(
    put,
    path = "/api/book/{id}",
    tag = "book",
    params(("id" = i64, Path, description = "Book id")),
    request_body = BookUpdate,
    responses(
        (status = 204, description = "Book updated"),
        (status = 400, description = "Missing or malformed field"),
        (status = 404, description = "Book or author not found"),
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Response, AppError> {
    let id = parse_id(&id_str)?;
    let input = RequestValidator::book_update(body)?;
    state.catalog.update_book(id, &input).await?;
    Ok(no_content())
}

#[utoipa::path(
    delete,
    path = "/api/book/{id}",
    tag = "book",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found"),
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id_str)?;
    state.catalog.delete_book(id).await?;
    Ok(no_content())
}
