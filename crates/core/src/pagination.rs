//! Page-based listing parameters.

use crate::error::CoreError;

/// Page used when the caller does not specify one.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: u32 = 50;

/// A validated `(page, page_size)` pair. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// Build a page request, rejecting `page < 1` and sizes outside
    /// `1..=MAX_PAGE_SIZE`. Out-of-range values are errors, not clamped.
    pub fn new(page: i64, page_size: i64) -> Result<Self, CoreError> {
        let page = u32::try_from(page)
            .ok()
            .filter(|p| *p >= 1)
            .ok_or_else(|| CoreError::Validation(format!("page must be at least 1, got {page}")))?;

        let page_size = u32::try_from(page_size)
            .ok()
            .filter(|s| (1..=MAX_PAGE_SIZE).contains(s))
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "pageSize must be between 1 and {MAX_PAGE_SIZE}, got {page_size}"
                ))
            })?;

        Ok(Self { page, page_size })
    }

    /// Apply defaults for missing values, then validate.
    pub fn from_params(page: Option<i64>, page_size: Option<i64>) -> Result<Self, CoreError> {
        Self::new(
            page.unwrap_or(i64::from(DEFAULT_PAGE)),
            page_size.unwrap_or(i64::from(DEFAULT_PAGE_SIZE)),
        )
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of records to skip before this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn defaults_apply_when_missing() {
        let page = PageRequest::from_params(None, None).unwrap();
        assert_eq!(page, PageRequest::default());
        assert_eq!(page.page(), 1);
        assert_eq!(page.page_size(), 5);
    }

    #[test]
    fn offset_is_zero_on_first_page() {
        assert_eq!(PageRequest::new(1, 50).unwrap().offset(), 0);
    }

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(PageRequest::new(3, 10).unwrap().offset(), 20);
    }

    #[test]
    fn page_zero_is_rejected() {
        assert_matches!(PageRequest::new(0, 5), Err(CoreError::Validation(_)));
    }

    #[test]
    fn negative_page_is_rejected() {
        assert_matches!(PageRequest::new(-1, 5), Err(CoreError::Validation(_)));
    }

    #[test]
    fn page_size_bounds_are_inclusive() {
        assert!(PageRequest::new(1, 1).is_ok());
        assert!(PageRequest::new(1, 50).is_ok());
        assert_matches!(PageRequest::new(1, 0), Err(CoreError::Validation(_)));
        assert_matches!(PageRequest::new(1, 51), Err(CoreError::Validation(_)));
    }

    #[test]
    fn page_beyond_u32_is_rejected() {
        assert_matches!(
            PageRequest::new(i64::from(u32::MAX) + 1, 5),
            Err(CoreError::Validation(_))
        );
    }
}
