//! Page rendering capability
//!
//! The pipeline only needs "given a URL, return the rendered page markup".
//! That seam is the `PageRenderer` trait; production uses the reqwest-backed
//! `HttpRenderer`, tests substitute fixture renderers.

use crate::{HarvestError, Result};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

/// Capability to navigate to a URL and return its rendered markup
///
/// Each job owns its renderer for the duration of one crawl cycle, so
/// navigation state never crosses jobs. Futures must be `Send` because jobs
/// run as spawned tasks on the multi-threaded runtime.
pub trait PageRenderer: Send {
    /// Navigates to `url` and returns the page markup
    fn render(&mut self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// HTTP-backed page renderer
pub struct HttpRenderer {
    client: Client,
}

impl HttpRenderer {
    /// Creates a renderer over an existing HTTP client
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl PageRenderer for HttpRenderer {
    async fn render(&mut self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| HarvestError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| HarvestError::Http {
            url: url.to_string(),
            source,
        })
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!("proxy-harvest/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}
