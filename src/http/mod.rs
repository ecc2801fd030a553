//! HTTP client module
//!
//! Provides the reqwest-based client used by the frontend to reach the
//! stuff endpoint.
//!
//! # Features
//!
//! - **Base URL resolution**: relative paths are joined onto a configured base
//! - **Error classification**: non-2xx responses become typed errors, with
//!   the server's `ApiError` message preserved when the body carries one

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};

#[cfg(test)]
mod tests;
