//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Default page size for the shop listing.
const DEFAULT_PAGE_SIZE: i64 = 20;
/// Upper bound on requested page sizes.
const MAX_PAGE_SIZE: i64 = 100;

/// One-based pagination parameters (`?page=&page_size=`).
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl PageParams {
    /// Clamped page size.
    pub fn limit(&self) -> i64 {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    /// Row offset implied by the (one-based) page number.
    pub fn offset(&self) -> i64 {
        let page = self.page.unwrap_or(1).max(1);
        (page - 1) * self.limit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page() {
        let params = PageParams {
            page: None,
            page_size: None,
        };
        assert_eq!(params.limit(), 20);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn offset_follows_page() {
        let params = PageParams {
            page: Some(3),
            page_size: Some(10),
        };
        assert_eq!(params.limit(), 10);
        assert_eq!(params.offset(), 20);
    }

    #[test]
    fn clamps_out_of_range_values() {
        let params = PageParams {
            page: Some(0),
            page_size: Some(10_000),
        };
        assert_eq!(params.limit(), 100);
        assert_eq!(params.offset(), 0);
    }
}
