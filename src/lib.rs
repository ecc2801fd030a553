// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Stuff Manager
//!
//! A paginated list of "stuff" records, end to end: a DuckDB-backed record
//! store, a page-number pagination service behind `GET /stuff?page={n}`, and
//! a client data layer with a renderable list view.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stuff_manager::{cli, database::StuffDatabase};
//!
//! #[tokio::main]
//! async fn main() -> stuff_manager::Result<()> {
//!     let db = StuffDatabase::open_in_memory()?;
//!     db.seed_demo(12)?;
//!
//!     let service = cli::shared_service(Arc::new(db));
//!     cli::serve(&Default::default(), service).await
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────┐   GET /stuff?page=n   ┌──────────────────────────┐
//! │  List View    │ ◄──── ListState ────  │  ListController          │
//! │  render()     │                       │  (page-tagged fetches)   │
//! └───────────────┘                       └────────────┬─────────────┘
//!                                                      │ HttpStuffApi
//! ┌──────────────────────────┐   ┌─────────────────────▼─────────────┐
//! │  StuffDatabase (DuckDB)  │ ◄─│  axum router → PaginationService  │
//! │  RecordStore             │   │  PageNumber → PageWindow          │
//! └──────────────────────────┘   └───────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Stuff records and API payloads
pub mod types;

/// Application configuration
pub mod config;

/// Record store backed by DuckDB
pub mod database;

/// Page numbers, windows, and the pagination service
pub mod pagination;

/// HTTP client
pub mod http;

/// Client data layer and list view
pub mod client;

/// Command-line interface and HTTP server
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use database::{RecordStore, StuffDatabase};
pub use pagination::{PageNumber, PaginationService, PAGE_SIZE};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
