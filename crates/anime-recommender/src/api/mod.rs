//! Jikan API v4 client implementation.
//!
//! This module provides a minimal client for the Jikan API (MyAnimeList
//! unofficial API), covering the top anime catalog endpoint.

pub mod client;
pub mod types;

pub use client::{JikanClient, PageFetch, TopAnimePages};
pub use types::*;
