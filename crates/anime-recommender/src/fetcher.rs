//! Top anime fetching with pagination.
//!
//! Accumulates entries from the catalog endpoint page by page until the
//! requested limit is reached or the page budget is exhausted.

use crate::api::{PageFetch, TopAnimePages};
use anyhow::Result;
use shared::AnimeEntry;
use tracing::{debug, info, warn};

/// Maximum entries per catalog request, imposed by the Jikan API
pub const PAGE_SIZE: usize = 25;

/// Accumulates top-ranked anime from a paginated catalog source
pub struct TopAnimeFetcher<S> {
    source: S,
}

impl<S: TopAnimePages> TopAnimeFetcher<S> {
    /// Create a fetcher over the given page source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch up to `limit` top-ranked entries, in catalog rank order
    ///
    /// Issues sequential page requests (page = 1, 2, ...) until the
    /// accumulated count reaches `limit` or the `ceil(limit / PAGE_SIZE)`
    /// page budget is exhausted. A non-success status on any page stops
    /// pagination and returns whatever was accumulated; transport and
    /// decode errors propagate.
    pub async fn fetch(&self, limit: usize) -> Result<Vec<AnimeEntry>> {
        let total_pages = limit.div_ceil(PAGE_SIZE);
        let mut entries: Vec<AnimeEntry> = Vec::with_capacity(limit);
        let mut page = 1;

        info!(limit, total_pages, "Fetching top anime");

        while entries.len() < limit && page <= total_pages {
            match self.source.top_anime(page as u32, PAGE_SIZE as u32).await? {
                PageFetch::Page(body) => {
                    debug!(page, received = body.data.len(), "Catalog page received");
                    entries.extend(body.data.into_iter().map(AnimeEntry::from));
                }
                PageFetch::Rejected(status) => {
                    warn!(
                        page,
                        status = %status,
                        "Error fetching catalog page, stopping pagination"
                    );
                    break;
                }
            }
            page += 1;
        }

        // Last page may overshoot the requested limit
        entries.truncate(limit);

        info!(fetched = entries.len(), "Top anime fetch complete");
        Ok(entries)
    }
}
