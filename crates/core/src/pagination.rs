//! Pagination rules shared by the repository and HTTP layers.
//!
//! Page indexes are 1-based: page 1 is the first page. A page past the last
//! one is valid and simply empty.

use serde::Serialize;

use crate::error::CoreError;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: i64 = 500;

/// Default `limit` for offset-paginated listings.
pub const DEFAULT_LIMIT: i64 = 50;

/// A validated, 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    index: i64,
    size: i64,
    offset: i64,
}

impl PageRequest {
    /// Validate a page index and size.
    ///
    /// Fails with [`CoreError::InvalidPagination`] when the index is below 1,
    /// the size is outside `1..=MAX_PAGE_SIZE`, or the row offset would
    /// overflow.
    pub fn new(index: i64, size: i64) -> Result<Self, CoreError> {
        if index < 1 {
            return Err(CoreError::InvalidPagination(format!(
                "page index must be at least 1, got {index}"
            )));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&size) {
            return Err(CoreError::InvalidPagination(format!(
                "page size must be between 1 and {MAX_PAGE_SIZE}, got {size}"
            )));
        }
        let offset = (index - 1).checked_mul(size).ok_or_else(|| {
            CoreError::InvalidPagination(format!("page index {index} is out of range"))
        })?;
        Ok(Self {
            index,
            size,
            offset,
        })
    }

    /// Validate a page index and size given as raw URL segments.
    ///
    /// Segments that are not integers, or do not fit in an `i64`, are
    /// rejected the same way as out-of-range values.
    pub fn parse(index: &str, size: &str) -> Result<Self, CoreError> {
        let index = parse_segment("page index", index)?;
        let size = parse_segment("page size", size)?;
        Self::new(index, size)
    }

    pub fn index(&self) -> i64 {
        self.index
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    /// Number of rows to skip before this page.
    pub fn offset(&self) -> i64 {
        self.offset
    }
}

fn parse_segment(what: &str, raw: &str) -> Result<i64, CoreError> {
    raw.parse().map_err(|_| {
        CoreError::InvalidPagination(format!("{what} must be an integer in range, got `{raw}`"))
    })
}

/// `ceil(total_count / page_size)`; zero rows means zero pages.
pub fn total_pages(total_count: i64, page_size: i64) -> i64 {
    debug_assert!(page_size > 0, "page size is validated by PageRequest");
    if total_count <= 0 {
        return 0;
    }
    (total_count + page_size - 1) / page_size
}

/// One page of results.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T: Serialize> {
    /// 1-based page index.
    pub index: i64,
    pub size: i64,
    pub items: Vec<T>,
}

/// Clamp an optional `limit` query parameter to `1..=MAX_PAGE_SIZE`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_PAGE_SIZE)
}

/// Clamp an optional `offset` query parameter to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn first_page_has_zero_offset() {
        let page = PageRequest::new(1, 10).unwrap();
        assert_eq!(page.offset(), 0);
        assert_eq!(page.index(), 1);
        assert_eq!(page.size(), 10);
    }

    #[test]
    fn offset_follows_index() {
        assert_eq!(PageRequest::new(3, 10).unwrap().offset(), 20);
    }

    #[test]
    fn zero_index_is_rejected() {
        assert_matches!(
            PageRequest::new(0, 10),
            Err(CoreError::InvalidPagination(_))
        );
    }

    #[test]
    fn non_positive_size_is_rejected() {
        assert_matches!(PageRequest::new(1, 0), Err(CoreError::InvalidPagination(_)));
        assert_matches!(
            PageRequest::new(1, -5),
            Err(CoreError::InvalidPagination(_))
        );
    }

    #[test]
    fn oversized_page_is_rejected() {
        assert!(PageRequest::new(1, MAX_PAGE_SIZE).is_ok());
        assert_matches!(
            PageRequest::new(1, MAX_PAGE_SIZE + 1),
            Err(CoreError::InvalidPagination(_))
        );
    }

    #[test]
    fn overflowing_offset_is_rejected() {
        assert_matches!(
            PageRequest::new(i64::MAX, 10),
            Err(CoreError::InvalidPagination(_))
        );
    }

    #[test]
    fn parse_accepts_numeric_segments() {
        let page = PageRequest::parse("2", "25").unwrap();
        assert_eq!(page, PageRequest::new(2, 25).unwrap());
    }

    #[test]
    fn parse_rejects_non_numeric_segments() {
        assert_matches!(
            PageRequest::parse("first", "10"),
            Err(CoreError::InvalidPagination(msg)) if msg.contains("page index")
        );
        assert_matches!(
            PageRequest::parse("1", "ten"),
            Err(CoreError::InvalidPagination(msg)) if msg.contains("page size")
        );
    }

    #[test]
    fn parse_rejects_segments_beyond_i64() {
        assert_matches!(
            PageRequest::parse("1", "99999999999999999999"),
            Err(CoreError::InvalidPagination(_))
        );
    }

    #[test]
    fn parse_still_applies_range_rules() {
        assert_matches!(
            PageRequest::parse("0", "10"),
            Err(CoreError::InvalidPagination(_))
        );
        assert_matches!(
            PageRequest::parse("1", "501"),
            Err(CoreError::InvalidPagination(_))
        );
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(30, 10), 3);
        assert_eq!(total_pages(31, 10), 4);
        assert_eq!(total_pages(1, 500), 1);
    }

    #[test]
    fn empty_store_has_no_pages() {
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn page_serializes_items() {
        let page = Page {
            index: 2,
            size: 2,
            items: vec!["a", "b"],
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["index"], 2);
        assert_eq!(json["items"][1], "b");
    }

    #[test]
    fn limits_are_clamped() {
        assert_eq!(clamp_limit(None), DEFAULT_LIMIT);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(10_000)), MAX_PAGE_SIZE);
        assert_eq!(clamp_offset(Some(-3)), 0);
        assert_eq!(clamp_offset(Some(40)), 40);
    }
}
