//! List state and its reducer
//!
//! All state changes go through [`reduce`], a pure function of the current
//! state and one [`Action`]. Fetch results carry the page they were issued
//! for; a result whose page no longer matches `current_page` is stale and is
//! dropped unchanged.

use crate::pagination::{is_last_page, PageNumber};
use crate::types::Stuff;

/// Everything the list view renders from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    /// Items of the most recently received page
    pub items: Vec<Stuff>,
    /// Page the user navigated to
    pub current_page: PageNumber,
    /// A fetch for `current_page` is in flight
    pub loading: bool,
    /// Message of the last failed fetch
    pub error: Option<String>,
}

impl ListState {
    /// Create the initial state: page 1, nothing loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether "Previous" can be pressed
    pub fn previous_enabled(&self) -> bool {
        !self.loading && !self.current_page.is_first()
    }

    /// Whether "Next" can be pressed. A short page means there is nothing
    /// after it.
    pub fn next_enabled(&self) -> bool {
        !self.loading && !is_last_page(self.items.len())
    }
}

/// State transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The user moved to another page
    PageChanged(PageNumber),
    /// A fetch for this page was issued
    FetchStarted(PageNumber),
    /// A fetch for this page returned items
    FetchSucceeded { page: PageNumber, items: Vec<Stuff> },
    /// A fetch for this page failed
    FetchFailed { page: PageNumber, message: String },
    /// Dismiss the error banner
    ClearError,
}

impl Action {
    /// The page a fetch action belongs to
    pub fn page(&self) -> Option<PageNumber> {
        match self {
            Action::FetchStarted(page)
            | Action::FetchSucceeded { page, .. }
            | Action::FetchFailed { page, .. } => Some(*page),
            Action::PageChanged(_) | Action::ClearError => None,
        }
    }
}

/// Apply one action to the state
pub fn reduce(state: ListState, action: Action) -> ListState {
    if let Some(page) = action.page() {
        if page != state.current_page {
            tracing::debug!(
                "Dropping stale result for page {} (now on page {})",
                page,
                state.current_page
            );
            return state;
        }
    }

    match action {
        Action::PageChanged(page) => ListState {
            current_page: page,
            ..state
        },
        Action::FetchStarted(_) => ListState {
            loading: true,
            error: None,
            ..state
        },
        Action::FetchSucceeded { items, .. } => ListState {
            items,
            loading: false,
            error: None,
            ..state
        },
        Action::FetchFailed { message, .. } => ListState {
            items: Vec::new(),
            loading: false,
            error: Some(message),
            ..state
        },
        Action::ClearError => ListState {
            error: None,
            ..state
        },
    }
}
