//! Jikan API client.

use super::types::TopAnimeResponse;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Outcome of a single catalog page request
///
/// A non-success HTTP status is data, not an error: the fetcher inspects it
/// and stops pagination while keeping what was already accumulated.
/// Transport and decode failures are real errors and propagate.
#[derive(Debug)]
pub enum PageFetch {
    /// The page was returned and decoded
    Page(TopAnimeResponse),
    /// The server answered with a non-success status
    Rejected(StatusCode),
}

/// Source of top anime catalog pages
#[async_trait]
pub trait TopAnimePages {
    /// Request one catalog page (1-based page number)
    async fn top_anime(&self, page: u32, per_page: u32) -> Result<PageFetch>;
}

/// Jikan API v4 client
pub struct JikanClient {
    /// HTTP client
    client: Client,
    /// Base URL for Jikan API
    base_url: String,
}

impl JikanClient {
    /// Create a new Jikan client
    pub fn new(base_url: String, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("anime-recommender/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl TopAnimePages for JikanClient {
    async fn top_anime(&self, page: u32, per_page: u32) -> Result<PageFetch> {
        let url = format!(
            "{}/top/anime?page={}&limit={}",
            self.base_url, page, per_page
        );

        debug!(url = %url, "Requesting catalog page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            return Ok(PageFetch::Rejected(status));
        }

        let body = response
            .json::<TopAnimeResponse>()
            .await
            .with_context(|| format!("Failed to parse response from {}", url))?;

        Ok(PageFetch::Page(body))
    }
}
