//! Data models for the recommender.
//!
//! This module defines the anime entry structure shared between the fetch
//! phase and the interactive recommendation loop.

use serde::{Deserialize, Serialize};

/// Fallback synopsis used when MyAnimeList has no description for an entry
pub const SYNOPSIS_PLACEHOLDER: &str = "No description available.";

/// One recommendable anime: title, synopsis and cover image URL
///
/// Entries are built once during the fetch phase and are read-only for the
/// rest of the process. The synopsis is always non-empty: missing or blank
/// source synopses are replaced with [`SYNOPSIS_PLACEHOLDER`] at
/// construction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeEntry {
    /// Default (romaji) title
    pub title: String,

    /// Synopsis text, never empty
    pub synopsis: String,

    /// Cover image URL (JPG variant); may be empty if the API record
    /// carried no image
    pub image_url: String,
}

impl AnimeEntry {
    /// Create an entry, substituting the placeholder for a missing or
    /// empty synopsis
    pub fn new(title: String, synopsis: Option<String>, image_url: String) -> Self {
        let synopsis = synopsis
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| SYNOPSIS_PLACEHOLDER.to_string());

        Self {
            title,
            synopsis,
            image_url,
        }
    }
}
