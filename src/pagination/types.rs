//! Pagination types
//!
//! Defines the page number, the store window it maps to, and the last-page
//! rule shared by the server and the client.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of records per page
pub const PAGE_SIZE: u64 = 10;

/// Message for any rejected page number
pub const INVALID_PAGE_MESSAGE: &str = "Page number must be greater than 0";

/// A validated, 1-based page number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct PageNumber(u64);

impl PageNumber {
    /// The first page
    pub const FIRST: PageNumber = PageNumber(1);

    /// Validate a page number. Anything below 1 is rejected; there is no
    /// upper bound.
    pub fn new(page: i64) -> Result<Self> {
        if page < 1 {
            return Err(Error::validation(INVALID_PAGE_MESSAGE));
        }
        Ok(Self(page as u64))
    }

    /// Parse the raw `page` query value. Absent means the first page;
    /// anything that is not an integer is rejected like a page below 1.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        match raw.map(str::trim) {
            None => Ok(Self::FIRST),
            Some(text) => text
                .parse::<i64>()
                .map_err(|_| Error::validation(INVALID_PAGE_MESSAGE))
                .and_then(Self::new),
        }
    }

    /// The page number as an integer
    pub fn get(self) -> u64 {
        self.0
    }

    /// Whether this is page 1
    pub fn is_first(self) -> bool {
        self.0 == 1
    }

    /// The following page
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// The preceding page, `None` on page 1
    pub fn previous(self) -> Option<Self> {
        (self.0 > 1).then(|| Self(self.0 - 1))
    }

    /// The store window this page selects
    pub fn window(self) -> PageWindow {
        PageWindow {
            offset: (self.0 - 1).saturating_mul(PAGE_SIZE),
            limit: PAGE_SIZE,
        }
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for PageNumber {
    type Error = Error;

    fn try_from(page: i64) -> Result<Self> {
        Self::new(page)
    }
}

impl From<PageNumber> for u64 {
    fn from(page: PageNumber) -> Self {
        page.0
    }
}

/// Slice of the ascending-id ordering to read from the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Records to skip
    pub offset: u64,
    /// Maximum records to return
    pub limit: u64,
}

/// Whether a page holding `records_count` records is the last one.
///
/// The endpoint never reports a total, so a short page is the only signal.
pub fn is_last_page(records_count: usize) -> bool {
    (records_count as u64) < PAGE_SIZE
}
