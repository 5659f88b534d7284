//! Pagination utilities for service layer
//!
//! Provides a simple `Pagination` struct and helpers to normalize inputs.

/// Pagination parameters as received from the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: i64,
    /// items per page
    pub page_size: i64,
}

impl Pagination {
    /// Clamp to `page >= 1` and `1 <= page_size <= max_page_size`.
    pub fn normalize(self, max_page_size: u64) -> Self {
        let max = i64::try_from(max_page_size).unwrap_or(i64::MAX).max(1);
        Self { page: self.page.max(1), page_size: self.page_size.clamp(1, max) }
    }

    /// Rows to skip: `(page - 1) * page_size`, saturating at `i64::MAX`
    /// (drivers bind OFFSET as a signed 64-bit integer).
    pub fn offset(&self) -> u64 {
        let page_idx = self.page.max(1) as u64 - 1;
        page_idx.saturating_mul(self.limit()).min(i64::MAX as u64)
    }

    pub fn limit(&self) -> u64 {
        self.page_size.max(0) as u64
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, page_size: 10 } }
}
