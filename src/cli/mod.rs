//! CLI module
//!
//! Command-line interface for the stuff list service.
//!
//! # Commands
//!
//! - `serve` - Start the HTTP endpoint over a DuckDB store
//! - `seed` - Insert demo records into a database file
//! - `fetch` - Print one page from a running server
//! - `browse` - Page through the list in the terminal

mod browse;
mod commands;
mod runner;
mod server;

pub use browse::browse;
pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use server::{router, serve, serve_on, shared_service, SharedService};
