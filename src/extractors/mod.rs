//! Request extractors shared by handlers.

pub mod json;
pub mod pagination;
pub use json::JsonBody;
pub use pagination::Pagination;
