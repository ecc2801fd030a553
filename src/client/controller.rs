//! List controller
//!
//! Drives a [`ListState`] from user navigation. Every page change spawns a
//! fetch task tagged with its page; the previous task is aborted, and any
//! result that still arrives for an old page is discarded by the reducer.

use super::api::StuffApi;
use super::state::{reduce, Action, ListState};
use super::view::{render, Node};
use crate::error::FETCH_FAILED_MESSAGE;
use crate::pagination::PageNumber;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Owns the list state and the fetch in flight
pub struct ListController<A> {
    api: Arc<A>,
    state: ListState,
    in_flight: Option<(PageNumber, JoinHandle<()>)>,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Action>,
}

impl<A: StuffApi + 'static> ListController<A> {
    /// Create a controller in the initial state
    pub fn new(api: A) -> Self {
        Self::with_shared(Arc::new(api))
    }

    /// Create a controller over a shared API handle
    pub fn with_shared(api: Arc<A>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            api,
            state: ListState::new(),
            in_flight: None,
            tx,
            rx,
        }
    }

    /// Current state
    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Render the current state
    pub fn view(&self) -> Node {
        render(&self.state)
    }

    /// Apply an action through the reducer
    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    /// Start loading the current page
    pub fn mount(&mut self) {
        self.load_page(self.state.current_page);
    }

    /// Navigate to a page and start fetching it
    pub fn load_page(&mut self, page: PageNumber) {
        if let Some((stale, handle)) = self.in_flight.take() {
            if !handle.is_finished() {
                debug!("Cancelling fetch for page {}", stale);
            }
            handle.abort();
        }

        self.dispatch(Action::PageChanged(page));
        self.dispatch(Action::FetchStarted(page));

        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let action = match api.fetch_page(page).await {
                Ok(items) => Action::FetchSucceeded { page, items },
                Err(e) => {
                    warn!("Fetching page {} failed: {}", page, e);
                    Action::FetchFailed {
                        page,
                        message: e.user_message(),
                    }
                }
            };
            // The controller may be gone by now
            let _ = tx.send(action);
        });
        self.in_flight = Some((page, handle));
    }

    /// Go to the next page if the control is enabled
    pub fn next_page(&mut self) -> bool {
        if !self.state.next_enabled() {
            return false;
        }
        self.load_page(self.state.current_page.next());
        true
    }

    /// Go to the previous page if the control is enabled
    pub fn previous_page(&mut self) -> bool {
        if !self.state.previous_enabled() {
            return false;
        }
        match self.state.current_page.previous() {
            Some(page) => {
                self.load_page(page);
                true
            }
            None => false,
        }
    }

    /// Fetch the current page again
    pub fn refresh(&mut self) {
        self.load_page(self.state.current_page);
    }

    /// Apply every result that has already arrived, without waiting
    pub fn poll(&mut self) {
        while let Ok(action) = self.rx.try_recv() {
            self.dispatch(action);
        }
    }

    /// Wait for the fetch in flight to finish and apply its result
    pub async fn settle(&mut self) -> &ListState {
        if let Some((page, handle)) = self.in_flight.take() {
            if let Err(e) = handle.await {
                if e.is_panic() {
                    warn!("Fetch task for page {} panicked", page);
                    self.dispatch(Action::FetchFailed {
                        page,
                        message: FETCH_FAILED_MESSAGE.to_string(),
                    });
                }
            }
        }
        self.poll();
        &self.state
    }
}

impl<A> Drop for ListController<A> {
    fn drop(&mut self) {
        if let Some((_, handle)) = self.in_flight.take() {
            handle.abort();
        }
    }
}
