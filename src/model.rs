//! Catalog entities as stored, plus the shapes returned over HTTP.
//!
//! The author/book relationship is a plain `author_id` column; the books of an
//! author are fetched with a query rather than held on the author.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Author {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// Book row.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub pub_date: DateTime<Utc>,
    pub author_id: i64,
}

/// Book representation. `author` repeats the author id as a string, the form
/// existing clients read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct BookView {
    pub id: i64,
    pub title: String,
    pub pub_date: DateTime<Utc>,
    pub author_id: i64,
    pub author: String,
}

impl From<Book> for BookView {
    fn from(b: Book) -> Self {
        BookView {
            id: b.id,
            title: b.title,
            pub_date: b.pub_date,
            author: b.author_id.to_string(),
            author_id: b.author_id,
        }
    }
}

/// Author detail with owned books in id order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct AuthorWithBooks {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub books: Vec<BookView>,
}

impl AuthorWithBooks {
    pub fn new(author: Author, books: Vec<Book>) -> Self {
        AuthorWithBooks {
            id: author.id,
            first_name: author.first_name,
            last_name: author.last_name,
            books: books.into_iter().map(BookView::from).collect(),
        }
    }
}

/// One page of books plus the numbers needed to page through the rest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct BookPage {
    pub page: u32,
    pub pages: u64,
    pub per_page: u32,
    pub total: u64,
    pub items: Vec<BookView>,
}

/// Point-in-time catalog counts. Append-only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow, ToSchema)]
pub struct StatsSnapshot {
    pub id: i64,
    pub count_of_author: i64,
    pub count_of_book: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, ToSchema)]
pub struct NewAuthor {
    pub first_name: String,
    pub last_name: String,
}

/// Input for book create. `pub_date` defaults to the insert time.
#[derive(Clone, Debug, PartialEq, Eq, ToSchema)]
pub struct NewBook {
    pub title: String,
    pub author_id: i64,
    pub pub_date: Option<DateTime<Utc>>,
}

/// Full overwrite of a book's title and author.
#[derive(Clone, Debug, PartialEq, Eq, ToSchema)]
pub struct BookUpdate {
    pub title: String,
    pub author_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_view_repeats_author_id() {
        let pub_date = "2020-01-02T03:04:05Z".parse().unwrap();
        let view = BookView::from(Book { id: 4, title: "T".into(), pub_date, author_id: 7 });
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 4,
                "title": "T",
                "pub_date": "2020-01-02T03:04:05Z",
                "author_id": 7,
                "author": "7"
            })
        );
    }
}
