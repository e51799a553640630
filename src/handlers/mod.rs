//! HTTP handlers for books, authors and statistics.

pub mod author;
pub mod book;
pub mod statistics;
pub use author::*;
pub use book::*;
pub use statistics::*;

use crate::error::AppError;

/// Parse an integer path id; anything else is a 400.
pub(crate) fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))
}
