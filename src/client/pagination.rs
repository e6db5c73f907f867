//! Pagination helpers for list requests
//!
//! List endpoints take `page[number]` and `page[size]` query parameters and
//! report `meta.pagination` in the response document.

use serde::{Deserialize, Serialize};

/// Maximum page size accepted by the API.
pub const MAX_PAGE_SIZE: usize = 100;

/// Query parameter pairs, in the order they are sent.
pub type QueryParams = Vec<(String, String)>;

/// Pagination parameters shared by every list operation.
///
/// # Example
/// ```ignore
/// let params = ListOptions::new().page_size(50).page_number(2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Page to return (1-indexed)
    pub page_number: Option<usize>,
    /// Items per page (max 100)
    pub page_size: Option<usize>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_number(mut self, page: usize) -> Self {
        self.page_number = Some(page);
        self
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Convert to query string parameters. Unset values are omitted and the
    /// page size is clamped to [`MAX_PAGE_SIZE`].
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = Vec::new();

        if let Some(page) = self.page_number {
            params.push(("page[number]".to_string(), page.to_string()));
        }

        if let Some(size) = self.page_size {
            params.push(("page[size]".to_string(), size.min(MAX_PAGE_SIZE).to_string()));
        }

        params
    }

    pub fn is_empty(&self) -> bool {
        self.page_number.is_none() && self.page_size.is_none()
    }
}

/// `meta.pagination` of a list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Pagination {
    #[serde(default)]
    pub current_page: usize,

    #[serde(default)]
    pub prev_page: Option<usize>,

    #[serde(default)]
    pub next_page: Option<usize>,

    #[serde(default)]
    pub total_pages: usize,

    #[serde(default)]
    pub total_count: usize,
}

impl Pagination {
    pub fn has_next_page(&self) -> bool {
        match self.next_page {
            Some(_) => true,
            None => self.current_page < self.total_pages,
        }
    }

    /// Page numbers after the current one.
    pub fn remaining_pages(&self) -> Vec<usize> {
        if self.current_page >= self.total_pages {
            return Vec::new();
        }
        ((self.current_page + 1)..=self.total_pages).collect()
    }
}

/// One page of a list result.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedResponse<T> {
    /// Items on this page
    pub items: Vec<T>,

    /// Pagination metadata, when the endpoint reports it
    pub pagination: Option<Pagination>,
}

impl<T> PagedResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            pagination: None,
        }
    }

    pub fn with_pagination(items: Vec<T>, pagination: Pagination) -> Self {
        Self {
            items,
            pagination: Some(pagination),
        }
    }

    pub fn current_page(&self) -> usize {
        self.pagination.as_ref().map(|p| p.current_page).unwrap_or(1)
    }

    /// Total items across all pages; falls back to this page's length.
    pub fn total_count(&self) -> usize {
        self.pagination
            .as_ref()
            .map(|p| p.total_count)
            .unwrap_or(self.items.len())
    }

    pub fn has_next_page(&self) -> bool {
        self.pagination
            .as_ref()
            .map(|p| p.has_next_page())
            .unwrap_or(false)
    }

    pub fn remaining_pages(&self) -> Vec<usize> {
        self.pagination
            .as_ref()
            .map(|p| p.remaining_pages())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(current: usize, total_pages: usize, total_count: usize) -> Pagination {
        Pagination {
            current_page: current,
            prev_page: if current > 1 { Some(current - 1) } else { None },
            next_page: if current < total_pages { Some(current + 1) } else { None },
            total_pages,
            total_count,
        }
    }

    #[test]
    fn test_list_options_default() {
        let params = ListOptions::new();
        assert!(params.is_empty());
        assert!(params.to_query_params().is_empty());
    }

    #[test]
    fn test_list_options_to_query() {
        let query = ListOptions::new().page_number(3).page_size(20).to_query_params();
        assert_eq!(
            query,
            vec![
                ("page[number]".to_string(), "3".to_string()),
                ("page[size]".to_string(), "20".to_string()),
            ]
        );
    }

    #[test]
    fn test_page_size_is_clamped() {
        let query = ListOptions::new().page_size(1000).to_query_params();
        assert_eq!(query, vec![("page[size]".to_string(), "100".to_string())]);
    }

    #[test]
    fn test_pagination_remaining_pages() {
        assert_eq!(meta(1, 4, 35).remaining_pages(), vec![2, 3, 4]);
        assert!(meta(4, 4, 35).remaining_pages().is_empty());
        assert!(meta(1, 1, 3).remaining_pages().is_empty());
    }

    #[test]
    fn test_pagination_has_next_page() {
        assert!(meta(1, 2, 15).has_next_page());
        assert!(!meta(2, 2, 15).has_next_page());
        assert!(!Pagination::default().has_next_page());
    }

    #[test]
    fn test_paged_response() {
        let page = PagedResponse::new(vec!["a", "b"]);
        assert_eq!(page.total_count(), 2);
        assert_eq!(page.current_page(), 1);
        assert!(!page.has_next_page());

        let page = PagedResponse::with_pagination(vec!["a"], meta(1, 3, 25));
        assert_eq!(page.total_count(), 25);
        assert!(page.has_next_page());
        assert_eq!(page.remaining_pages(), vec![2, 3]);
    }
}
