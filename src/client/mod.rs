//! Client data layer and list view
//!
//! # Overview
//!
//! - [`StuffApi`] / [`HttpStuffApi`] - fetch a page from the endpoint
//! - [`ListState`] / [`reduce`] - state transitions as a pure reducer
//! - [`ListController`] - issues page-tagged fetch tasks and applies results
//! - [`render`] - pure rendering of the state into a queryable node tree

mod api;
mod controller;
mod state;
mod view;

pub use api::{HttpStuffApi, StuffApi, STUFF_PATH};
pub use controller::ListController;
pub use state::{reduce, Action, ListState};
pub use view::{
    render, Node, Role, COLUMN_HEADERS, EMPTY_MESSAGE, ERROR_LABEL, LOADING_LABEL, NEXT_LABEL,
    PREVIOUS_LABEL, SECTION_TITLE, SUBTITLE, TITLE,
};
