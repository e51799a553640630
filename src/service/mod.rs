//! CatalogService: author/book operations, pagination and request validation.

mod catalog;
pub mod pagination;
mod validation;
pub use catalog::CatalogService;
pub use pagination::{page_count, PageRequest, ALLOWED_PER_PAGE, DEFAULT_PAGE, DEFAULT_PER_PAGE};
pub use validation::{parse_timestamp, FieldKind, FieldRule, RequestValidator};
