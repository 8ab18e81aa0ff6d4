//! Random anime recommender.
//!
//! This library fetches top-ranked anime from the Jikan API v4 and presents
//! random picks in an interactive terminal loop, optionally opening cover
//! images in the platform's default viewer.

pub mod api;
pub mod fetcher;
pub mod session;
pub mod viewer;

pub use api::{JikanClient, PageFetch, TopAnimePages};
pub use fetcher::{TopAnimeFetcher, PAGE_SIZE};
pub use session::RecommendationSession;
pub use viewer::{CoverView, ImageViewer, ViewerError};
