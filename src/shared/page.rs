//! Pagination primitives for list endpoints.
//!
//! A `Page` is a bounded slice of a list plus metadata: item count, page
//! index/size, total pages, and has-more flags in each direction.

use serde::{Deserialize, Serialize};

/// Default page size when the caller does not supply one
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Default ceiling on page size; requests above the ceiling are clamped
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 50;

/// Requested page index and size. Both are 1-based and at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageOptions {
    pub page: u32,
    pub page_size: u32,
}

impl PageOptions {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Normalize to valid bounds: page and size at least 1, size capped at
    /// `max_page_size`.
    pub fn clamped(self, max_page_size: u32) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, max_page_size.max(1)),
        }
    }

    /// Zero-based offset of the first item on this page
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * (self.page_size as usize)
    }
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A bounded slice of a list plus pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The entries on this page
    pub items: Vec<T>,
    /// Number of entries on this page
    pub item_count: usize,
    /// 1-based page index
    pub page: u32,
    /// Requested page size (after clamping)
    pub page_size: u32,
    /// Total entries across all pages
    pub total_items: usize,
    /// Total number of pages
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    /// An empty page: zero items, zero total, no neighbors
    pub fn empty(opts: PageOptions) -> Self {
        Self {
            items: Vec::new(),
            item_count: 0,
            page: opts.page,
            page_size: opts.page_size,
            total_items: 0,
            total_pages: 0,
            has_next: false,
            has_previous: false,
        }
    }

    /// Wrap an already-sliced set of items with metadata derived from the
    /// full list length and the requested options
    pub fn from_slice(items: Vec<T>, total_items: usize, opts: PageOptions) -> Self {
        let total_pages = (total_items as u32).div_ceil(opts.page_size.max(1));
        Self {
            item_count: items.len(),
            items,
            page: opts.page,
            page_size: opts.page_size,
            total_items,
            total_pages,
            has_next: opts.page < total_pages,
            has_previous: opts.page > 1 && total_items > 0,
        }
    }
}
