//! Record store backed by DuckDB
//!
//! The pagination service only needs one capability from storage: read a
//! window of records in ascending id order. [`RecordStore`] names that
//! capability and [`StuffDatabase`] implements it over an embedded DuckDB
//! connection, in memory or on disk.

mod engine;

pub use engine::StuffDatabase;

use crate::error::Result;
use crate::pagination::PageWindow;
use crate::types::Stuff;

/// Read access to the ordered collection of stuff records
pub trait RecordStore: Send + Sync {
    /// Skip `window.offset` records, then return up to `window.limit`
    /// records, ordered by ascending id
    fn fetch_window(&self, window: PageWindow) -> Result<Vec<Stuff>>;
}

impl<S: RecordStore + ?Sized> RecordStore for std::sync::Arc<S> {
    fn fetch_window(&self, window: PageWindow) -> Result<Vec<Stuff>> {
        (**self).fetch_window(window)
    }
}
