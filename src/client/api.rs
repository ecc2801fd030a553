//! Transport used by the list controller to fetch pages

use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::pagination::PageNumber;
use crate::types::Stuff;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Path of the list endpoint
pub const STUFF_PATH: &str = "/stuff";

/// Source of stuff pages
#[async_trait]
pub trait StuffApi: Send + Sync {
    /// Fetch one page of items
    async fn fetch_page(&self, page: PageNumber) -> Result<Vec<Stuff>>;
}

/// [`StuffApi`] over `GET /stuff?page={n}`
#[derive(Debug, Clone)]
pub struct HttpStuffApi {
    client: HttpClient,
}

impl HttpStuffApi {
    /// Create an API client for a server base URL
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let config = HttpClientConfig::builder()
            .base_url(base_url)
            .timeout(timeout)
            .header("Accept", "application/json")
            .build();
        Ok(Self::with_client(HttpClient::with_config(config)?))
    }

    /// Wrap an existing HTTP client
    pub fn with_client(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StuffApi for HttpStuffApi {
    async fn fetch_page(&self, page: PageNumber) -> Result<Vec<Stuff>> {
        debug!("Fetching stuff page {}", page);
        self.client
            .get_json_with_config(
                STUFF_PATH,
                RequestConfig::new().query("page", page.to_string()),
            )
            .await
    }
}
