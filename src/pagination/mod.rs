//! Pagination module
//!
//! Fixed-size, 1-based page numbering over the store's ascending-id order.
//!
//! # Overview
//!
//! Page `k` covers store offsets `[(k-1)*10, (k-1)*10 + 10)`, clipped to the
//! number of stored records. Pages below 1 are a validation error; pages past
//! the end are empty, never an error.

mod service;
mod types;

pub use service::PaginationService;
pub use types::{is_last_page, PageNumber, PageWindow, INVALID_PAGE_MESSAGE, PAGE_SIZE};

#[cfg(test)]
mod tests;
