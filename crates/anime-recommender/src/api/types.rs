//! Jikan API v4 response types.
//!
//! These types represent the JSON responses from the Jikan API, trimmed to
//! the fields the recommender reads.

use serde::{Deserialize, Serialize};
use shared::AnimeEntry;

/// Top anime page response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopAnimeResponse {
    pub data: Vec<TopAnimeEntry>,
}

/// Top anime entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopAnimeEntry {
    pub title: String,
    pub synopsis: Option<String>,
    pub images: AnimeImages,
}

/// Anime images
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimeImages {
    pub jpg: ImageSet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSet {
    pub image_url: Option<String>,
}

impl From<TopAnimeEntry> for AnimeEntry {
    fn from(entry: TopAnimeEntry) -> Self {
        AnimeEntry::new(
            entry.title,
            entry.synopsis,
            entry.images.jpg.image_url.unwrap_or_default(),
        )
    }
}
