//! Pagination descriptor and paginator
//!
//! [`Pagination`] is the only place page math happens. It can only be built
//! through [`Pagination::new`], which rejects a zero page or page size, so every
//! descriptor in circulation satisfies `total_pages >= 1` and
//! `start_index <= end_index <= total_items` for in-range pages.

use serde::Serialize;

use crate::error::{CoreError, CoreResult};

/// Page size used when nothing else is configured
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Derived metadata for one page request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    current_page: usize,
    items_per_page: usize,
    total_items: usize,
    total_pages: usize,
    start_index: usize,
    end_index: usize,
    has_next_page: bool,
    has_previous_page: bool,
}

impl Pagination {
    pub fn new(current_page: usize, items_per_page: usize, total_items: usize) -> CoreResult<Self> {
        if items_per_page == 0 {
            return Err(CoreError::InvalidPagination {
                message: "Items per page must be greater than 0".to_string(),
            });
        }
        if current_page == 0 {
            return Err(CoreError::InvalidPagination {
                message: "Current page must be at least 1".to_string(),
            });
        }

        Ok(Self::derive(current_page, items_per_page, total_items))
    }

    /// Page math for arguments already known to be non-zero
    pub(crate) fn derive(current_page: usize, items_per_page: usize, total_items: usize) -> Self {
        debug_assert!(current_page >= 1 && items_per_page >= 1);

        let total_pages = total_items.div_ceil(items_per_page).max(1);
        let start_index = (current_page - 1).saturating_mul(items_per_page);
        let end_index = start_index.saturating_add(items_per_page).min(total_items);

        Self {
            current_page,
            items_per_page,
            total_items,
            total_pages,
            start_index,
            end_index,
            has_next_page: current_page < total_pages,
            has_previous_page: current_page > 1,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn end_index(&self) -> usize {
        self.end_index
    }

    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    pub fn has_previous_page(&self) -> bool {
        self.has_previous_page
    }

    /// Whether `page` is a page this descriptor's collection actually has
    pub fn contains_page(&self, page: usize) -> bool {
        (1..=self.total_pages).contains(&page)
    }

    /// One-based inclusive range of the items on this page, for "Showing 11-20 of 25"
    ///
    /// `None` when the page holds nothing.
    pub fn display_range(&self) -> Option<(usize, usize)> {
        if self.start_index < self.end_index {
            Some((self.start_index + 1, self.end_index))
        } else {
            None
        }
    }
}

/// A visible slice of an ordered collection together with its descriptor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Cut page `current_page` out of an already ordered collection
///
/// A page past the end yields no items rather than an error.
pub fn paginate<T: Clone>(ordered: &[T], current_page: usize, items_per_page: usize) -> CoreResult<Page<T>> {
    let pagination = Pagination::new(current_page, items_per_page, ordered.len())?;
    let items = if pagination.start_index < pagination.end_index {
        ordered[pagination.start_index..pagination.end_index].to_vec()
    } else {
        Vec::new()
    };

    Ok(Page { items, pagination })
}
