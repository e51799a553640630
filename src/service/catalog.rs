//! Author and book operations against the SQLite store.
//!
//! Writes that reference an author look it up first and then write, as two
//! statements. The store's foreign key still rejects the write if the author
//! disappears in between; that surfaces as [`AppError::Referential`].

use crate::error::AppError;
use crate::model::{Author, AuthorWithBooks, Book, BookPage, BookUpdate, BookView, NewAuthor, NewBook};
use crate::service::pagination::{page_count, PageRequest};
use chrono::Utc;
use sqlx::SqlitePool;

const AUTHOR_COLUMNS: &str = "id, first_name, last_name";
const BOOK_COLUMNS: &str = "id, title, pub_date, author_id";

#[derive(Clone)]
pub struct CatalogService {
    pool: SqlitePool,
}

impl CatalogService {
    pub fn new(pool: SqlitePool) -> Self {
        CatalogService { pool }
    }

    // --- authors ---

    pub async fn create_author(&self, input: &NewAuthor) -> Result<i64, AppError> {
        let sql = "INSERT INTO author (first_name, last_name) VALUES (?, ?)";
        tracing::debug!(sql = %sql, "query");
        let id = sqlx::query(sql)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();
        tracing::info!(author_id = id, "author created");
        Ok(id)
    }

    /// All authors in id order.
    pub async fn list_authors(&self) -> Result<Vec<Author>, AppError> {
        let sql = format!("SELECT {} FROM author ORDER BY id", AUTHOR_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Author>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    pub async fn get_author(&self, id: i64) -> Result<Author, AppError> {
        self.find_author(id).await?.ok_or_else(|| AppError::author_not_found(id))
    }

    pub async fn get_author_with_books(&self, id: i64) -> Result<AuthorWithBooks, AppError> {
        let author = self.get_author(id).await?;
        let books = self.books_by_author(id).await?;
        Ok(AuthorWithBooks::new(author, books))
    }

    /// Books owned by `author_id`, in id (creation) order.
    pub async fn books_by_author(&self, author_id: i64) -> Result<Vec<Book>, AppError> {
        let sql = format!("SELECT {} FROM book WHERE author_id = ? ORDER BY id", BOOK_COLUMNS);
        tracing::debug!(sql = %sql, author_id, "query");
        let rows = sqlx::query_as::<_, Book>(&sql)
            .bind(author_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn update_author(&self, id: i64, input: &NewAuthor) -> Result<(), AppError> {
        let sql = "UPDATE author SET first_name = ?, last_name = ? WHERE id = ?";
        tracing::debug!(sql = %sql, author_id = id, "query");
        let done = sqlx::query(sql)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if done.rows_affected() == 0 {
            return Err(AppError::author_not_found(id));
        }
        Ok(())
    }

    /// Delete the author and every book it owns in one transaction.
    pub async fn delete_author(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        tracing::debug!(author_id = id, "cascade delete (tx)");
        let books = sqlx::query("DELETE FROM book WHERE author_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        let authors = sqlx::query("DELETE FROM author WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if authors == 0 {
            return Err(AppError::author_not_found(id));
        }
        tx.commit().await?;
        tracing::info!(author_id = id, books_deleted = books, "author deleted");
        Ok(())
    }

    async fn find_author(&self, id: i64) -> Result<Option<Author>, AppError> {
        let sql = format!("SELECT {} FROM author WHERE id = ?", AUTHOR_COLUMNS);
        tracing::debug!(sql = %sql, author_id = id, "query");
        let row = sqlx::query_as::<_, Author>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn require_author(&self, id: i64) -> Result<(), AppError> {
        match self.find_author(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::Referential { author_id: id }),
        }
    }

    // --- books ---

    pub async fn create_book(&self, input: &NewBook) -> Result<i64, AppError> {
        self.require_author(input.author_id).await?;
        let pub_date = input.pub_date.unwrap_or_else(Utc::now);
        let sql = "INSERT INTO book (title, pub_date, author_id) VALUES (?, ?, ?)";
        tracing::debug!(sql = %sql, author_id = input.author_id, "query");
        let id = sqlx::query(sql)
            .bind(&input.title)
            .bind(pub_date)
            .bind(input.author_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_book_write(e, input.author_id))?
            .last_insert_rowid();
        tracing::info!(book_id = id, author_id = input.author_id, "book created");
        Ok(id)
    }

    pub async fn get_book(&self, id: i64) -> Result<BookView, AppError> {
        let sql = format!("SELECT {} FROM book WHERE id = ?", BOOK_COLUMNS);
        tracing::debug!(sql = %sql, book_id = id, "query");
        let row = sqlx::query_as::<_, Book>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::book_not_found(id))?;
        Ok(row.into())
    }

    /// One page of books in id order. A page past the end has no items.
    pub async fn list_books(&self, req: PageRequest) -> Result<BookPage, AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM book")
            .fetch_one(&self.pool)
            .await?;
        let total = total.max(0) as u64;
        let sql = format!("SELECT {} FROM book ORDER BY id LIMIT ? OFFSET ?", BOOK_COLUMNS);
        tracing::debug!(sql = %sql, limit = req.limit(), offset = req.offset(), "query");
        let rows = sqlx::query_as::<_, Book>(&sql)
            .bind(req.limit())
            .bind(req.offset())
            .fetch_all(&self.pool)
            .await?;
        Ok(BookPage {
            page: req.page(),
            pages: page_count(total, req.per_page()),
            per_page: req.per_page(),
            total,
            items: rows.into_iter().map(BookView::from).collect(),
        })
    }

    /// Overwrite title and author. `pub_date` is left as is.
    pub async fn update_book(&self, id: i64, input: &BookUpdate) -> Result<(), AppError> {
        let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM book WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        if exists.is_none() {
            return Err(AppError::book_not_found(id));
        }
        self.require_author(input.author_id).await?;
        let sql = "UPDATE book SET title = ?, author_id = ? WHERE id = ?";
        tracing::debug!(sql = %sql, book_id = id, author_id = input.author_id, "query");
        let done = sqlx::query(sql)
            .bind(&input.title)
            .bind(input.author_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_book_write(e, input.author_id))?;
        if done.rows_affected() == 0 {
            return Err(AppError::book_not_found(id));
        }
        Ok(())
    }

    /// Not idempotent: a second delete of the same id is `NotFound`.
    pub async fn delete_book(&self, id: i64) -> Result<(), AppError> {
        let sql = "DELETE FROM book WHERE id = ?";
        tracing::debug!(sql = %sql, book_id = id, "query");
        let done = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        if done.rows_affected() == 0 {
            return Err(AppError::book_not_found(id));
        }
        tracing::info!(book_id = id, "book deleted");
        Ok(())
    }
}
