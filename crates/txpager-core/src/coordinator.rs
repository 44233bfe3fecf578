//! Page-stability coordinator
//!
//! Owns the "current page" of one viewing session while the underlying
//! collection is replaced wholesale by refreshes. Every mutation leaves the
//! coordinator with a descriptor that matches its collection, so navigation
//! requests are always checked against up-to-date bounds.
//!
//! Navigation never fails: out-of-range requests are ignored and a refresh
//! that leaves the current page dangling sends the session back to page 1.

use serde::Serialize;
use txpager_config::SortDirection;

use crate::error::{CoreError, CoreResult};
use crate::locator::{locate, Matcher};
use crate::pagination::{Page, Pagination};
use crate::record::{Identified, Timestamped};
use crate::sort::sort_by_timestamp;

/// What a refresh did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RefreshOutcome {
    pub total_items: usize,
    pub total_pages: usize,
    pub previous_page: usize,
    pub current_page: usize,
    /// The previous page no longer existed and the session went back to page 1
    pub page_reset: bool,
}

#[derive(Debug, Clone)]
pub struct PageCoordinator<T> {
    ordered: Vec<T>,
    direction: SortDirection,
    items_per_page: usize,
    current_page: usize,
    pagination: Pagination,
    loaded: bool,
}

impl<T: Identified + Timestamped + Clone> PageCoordinator<T> {
    /// Start an empty session on page 1
    pub fn new(items_per_page: usize, direction: SortDirection) -> CoreResult<Self> {
        let pagination = Pagination::new(1, items_per_page, 0)?;
        Ok(Self {
            ordered: Vec::new(),
            direction,
            items_per_page,
            current_page: 1,
            pagination,
            loaded: false,
        })
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Descriptor for the current page
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// The whole collection in canonical order
    pub fn ordered_items(&self) -> &[T] {
        &self.ordered
    }

    pub fn visible_items(&self) -> &[T] {
        let start = self.pagination.start_index();
        let end = self.pagination.end_index();
        if start < end {
            &self.ordered[start..end]
        } else {
            &[]
        }
    }

    /// Whether at least one refresh has been applied
    pub fn has_data(&self) -> bool {
        self.loaded
    }

    pub fn view(&self) -> Page<T> {
        Page {
            items: self.visible_items().to_vec(),
            pagination: self.pagination,
        }
    }

    /// Jump to `page` if it exists; returns whether the request was applied
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if !self.pagination.contains_page(page) {
            log::debug!(
                "Ignoring navigation to page {} (valid pages 1..={})",
                page,
                self.pagination.total_pages()
            );
            return false;
        }
        self.set_page(page);
        true
    }

    pub fn go_to_next_page(&mut self) -> bool {
        if !self.pagination.has_next_page() {
            log::debug!("Already on the last page ({})", self.current_page);
            return false;
        }
        self.set_page(self.current_page + 1);
        true
    }

    pub fn go_to_previous_page(&mut self) -> bool {
        if !self.pagination.has_previous_page() {
            log::debug!("Already on the first page");
            return false;
        }
        self.set_page(self.current_page - 1);
        true
    }

    /// Move to the page holding the matching item, or page 1 if there is none
    pub fn go_to_item(&mut self, matcher: Matcher<'_, T>) -> usize {
        // items_per_page was validated on the way in, so only not-found remains
        let page = locate(&self.ordered, matcher, self.items_per_page).unwrap_or(1);
        self.set_page(page);
        page
    }

    /// Replace the collection with a freshly fetched one
    pub fn refresh(&mut self, collection: &[T]) -> RefreshOutcome {
        let previous_page = self.current_page;
        self.ordered = sort_by_timestamp(collection, self.direction);
        self.loaded = true;

        let candidate = Pagination::derive(previous_page, self.items_per_page, self.ordered.len());
        let page_reset = previous_page > candidate.total_pages();
        if page_reset {
            log::info!(
                "Page {} no longer exists after refresh ({} pages), returning to page 1",
                previous_page,
                candidate.total_pages()
            );
            self.set_page(1);
        } else {
            self.pagination = candidate;
        }

        RefreshOutcome {
            total_items: self.ordered.len(),
            total_pages: self.pagination.total_pages(),
            previous_page,
            current_page: self.current_page,
            page_reset,
        }
    }

    /// Change the page size, keeping the first visible item in view
    pub fn set_items_per_page(&mut self, items_per_page: usize) -> CoreResult<usize> {
        if items_per_page == 0 {
            return Err(CoreError::InvalidPagination {
                message: "Items per page must be greater than 0".to_string(),
            });
        }

        let anchor = self.visible_items().first().map(|item| item.id().to_string());
        self.items_per_page = items_per_page;
        match anchor {
            Some(id) => {
                self.go_to_item(Matcher::Id(&id));
            }
            None => self.set_page(1),
        }
        Ok(self.current_page)
    }

    /// Re-sort under a new direction and start again from page 1
    pub fn set_direction(&mut self, direction: SortDirection) {
        self.direction = direction;
        self.ordered = sort_by_timestamp(&self.ordered, direction);
        self.set_page(1);
    }

    fn set_page(&mut self, page: usize) {
        self.current_page = page;
        self.pagination = Pagination::derive(page, self.items_per_page, self.ordered.len());
    }
}
