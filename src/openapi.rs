//! OpenAPI document for the catalog endpoints.

use crate::handlers;
use crate::model::{Author, AuthorWithBooks, BookPage, BookUpdate, BookView, NewAuthor, NewBook, StatsSnapshot};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Book Library API", description = "Authors, books and catalog statistics"),
    paths(
        handlers::book::list_books,
        handlers::book::create_book,
        handlers::book::get_book,
        handlers::book::update_book,
        handlers::book::delete_book,
        handlers::author::list_authors,
        handlers::author::create_author,
        handlers::author::get_author,
        handlers::author::update_author,
        handlers::author::delete_author,
        handlers::statistics::list_statistics,
    ),
    components(schemas(Author, AuthorWithBooks, BookView, BookPage, NewAuthor, NewBook, BookUpdate, StatsSnapshot)),
    tags(
        (name = "book", description = "Book CRUD"),
        (name = "author", description = "Author CRUD"),
        (name = "statistics", description = "Periodic catalog counts"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_path() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        assert_eq!(
            paths,
            ["/api/author", "/api/author/{id}", "/api/book", "/api/book/{id}", "/api/statistics"]
        );
    }
}
