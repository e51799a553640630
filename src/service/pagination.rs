//! Page arithmetic for book listings.
//!
//! A page past the end is not an error: it yields no items while `pages` and
//! `total` still describe the whole set.

use crate::error::AppError;

pub const ALLOWED_PER_PAGE: [u32; 5] = [2, 10, 30, 40, 50];
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// `page` is 1-based; `per_page` must be one of [`ALLOWED_PER_PAGE`].
    pub fn new(page: u32, per_page: u32) -> Result<Self, AppError> {
        if page < 1 {
            return Err(AppError::Validation("page must be at least 1".into()));
        }
        if !ALLOWED_PER_PAGE.contains(&per_page) {
            return Err(AppError::Validation(format!(
                "per_page must be one of: {:?}",
                ALLOWED_PER_PAGE
            )));
        }
        Ok(PageRequest { page, per_page })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// ceil(total / per_page); zero when the set is empty.
pub fn page_count(total: u64, per_page: u32) -> u64 {
    total.div_ceil(u64::from(per_page.max(1)))
}
