//! Server-driven pagination envelope.

use serde::{Deserialize, Serialize};

/// One page of a server-side result set.
///
/// The Platform API owns filtering and ordering; clients pass a 1-based
/// `page` query parameter and render whatever comes back. A page number
/// past the end of the result set yields an empty page, never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// 1-based page number.
    pub page: u32,
    /// Page size requested.
    pub per_page: u32,
    /// Total items across all pages.
    pub total_items: u64,
    /// Total number of pages. Zero for an empty result set.
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// An empty page.
    #[must_use]
    pub const fn empty(page: u32, per_page: u32) -> Self {
        Self {
            items: Vec::new(),
            page,
            per_page,
            total_items: 0,
            total_pages: 0,
        }
    }

    /// Paginate an in-memory slice, mirroring the server's contract.
    ///
    /// `page` is 1-based; zero is treated as one. Requests past the last
    /// page return an empty `items` with the totals intact.
    #[must_use]
    pub fn slice(items: Vec<T>, page: u32, per_page: u32) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total_items = items.len() as u64;
        let total_pages = u32::try_from(total_items.div_ceil(u64::from(per_page))).unwrap_or(u32::MAX);

        let start = (page as usize - 1).saturating_mul(per_page as usize);
        let items = if start >= items.len() {
            Vec::new()
        } else {
            items
                .into_iter()
                .skip(start)
                .take(per_page as usize)
                .collect()
        };

        Self {
            items,
            page,
            per_page,
            total_items,
            total_pages,
        }
    }

    /// Whether a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether an earlier page exists.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 1 && self.total_pages > 0
    }

    /// Map each item, keeping the page metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_first_page() {
        let page = Page::slice((1..=10).collect(), 1, 4);
        assert_eq!(page.items, vec![1, 2, 3, 4]);
        assert_eq!(page.total_items, 10);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next());
        assert!(!page.has_prev());
    }

    #[test]
    fn test_slice_last_partial_page() {
        let page = Page::slice((1..=10).collect(), 3, 4);
        assert_eq!(page.items, vec![9, 10]);
        assert!(!page.has_next());
        assert!(page.has_prev());
    }

    #[test]
    fn test_slice_beyond_last_page_is_empty_not_error() {
        let page = Page::slice((1..=10).collect(), 7, 4);
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 10);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next());
    }

    #[test]
    fn test_empty_dataset_has_zero_pages() {
        let page = Page::slice(Vec::<i32>::new(), 1, 20);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next());
        assert!(!page.has_prev());
    }

    #[test]
    fn test_page_zero_treated_as_one() {
        let page = Page::slice((1..=5).collect(), 0, 2);
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_map_preserves_metadata() {
        let page = Page::slice((1..=5).collect(), 2, 2).map(|n| n * 10);
        assert_eq!(page.items, vec![30, 40]);
        assert_eq!(page.total_items, 5);
        assert_eq!(page.total_pages, 3);
    }
}
