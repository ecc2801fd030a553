//! Pagination service
//!
//! Validates page numbers and reads the matching window from a record store.

use super::types::PageNumber;
use crate::database::RecordStore;
use crate::error::Result;
use crate::types::Stuff;
use tracing::debug;

/// Serves fixed-size pages of stuff from a record store
#[derive(Debug, Clone)]
pub struct PaginationService<S> {
    store: S,
}

impl<S: RecordStore> PaginationService<S> {
    /// Create a service over a store handle
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch a page by raw number. Pages below 1 fail validation without
    /// touching the store; pages past the end come back empty.
    pub fn get_page(&self, page: i64) -> Result<Vec<Stuff>> {
        let page = PageNumber::new(page)?;
        self.fetch(page)
    }

    /// Fetch a page from the raw `page` query value
    pub fn get_page_from_query(&self, raw: Option<&str>) -> Result<Vec<Stuff>> {
        let page = PageNumber::parse(raw)?;
        self.fetch(page)
    }

    /// Fetch an already validated page
    pub fn fetch(&self, page: PageNumber) -> Result<Vec<Stuff>> {
        let window = page.window();
        let items = self.store.fetch_window(window)?;
        debug!(
            "Page {} (offset {}) returned {} items",
            page,
            window.offset,
            items.len()
        );
        Ok(items)
    }
}
