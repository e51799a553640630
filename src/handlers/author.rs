//! Author handlers. Deleting an author deletes its books.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::handlers::parse_id;
use crate::model::{Author, AuthorWithBooks, NewAuthor};
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
    path = "/api/author",
    tag = "author",
    responses((status = 200, description = "All authors", body = [Author]))
)]
pub async fn list_authors(State(state): State<AppState>) -> Result<Json<Vec<Author>>, AppError> {
    Ok(Json(state.catalog.list_authors().await?))
}

#[utoipa::path(
    post,
    path = "/api/author",
    tag = "author",
    request_body = NewAuthor,
    responses(
        (status = 201, description = "Author created"),
        (status = 400, description = "Missing or malformed field"),
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Response, AppError> {
    let input = RequestValidator::new_author(body)?;
    let id = state.catalog.create_author(&input).await?;
    Ok(created("author", id))
}

#[utoipa::path(
    get,
    path = "/api/author/{id}",
    tag = "author",
    params(("id" = i64, Path, description = "Author id")),
    responses(
        (status = 200, description = "Author with books", body = AuthorWithBooks),
        (status = 404, description = "Author not found"),
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<AuthorWithBooks>, AppError> {
    let id = parse_id(&id_str)?;
    Ok(Json(state.catalog.get_author_with_books(id).await?))
}

#[utoipa::path(
    put,
    path = "/api/author/{id}",
    tag = "author",
    params(("id" = i64, Path, description = "Author id")),
    request_body = NewAuthor,
    responses(
        (status = 204, description = "Author updated"),
        (status = 400, description = "Missing or malformed field"),
        (status = 404, description = "Author not found"),
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Response, AppError> {
    let id = parse_id(&id_str)?;
    let input = RequestValidator::new_author(body)?;
    state.catalog.update_author(id, &input).await?;
    Ok(no_content())
}

#[utoipa::path(
    delete,
    path = "/api/author/{id}",
    tag = "author",
    params(("id" = i64, Path, description = "Author id")),
    responses(
        (status = 204, description = "Author and its books deleted"),
        (status = 404, description = "Author not found"),
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id_str)?;
    state.catalog.delete_author(id).await?;
    Ok(no_content())
}
