//! Shared library for the anime recommender.
//!
//! This crate provides common functionality used by the binary crate:
//! - Configuration management
//! - Data models
//! - Logging infrastructure

pub mod config;
pub mod logging;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use logging::LogConfig;
pub use models::{AnimeEntry, SYNOPSIS_PLACEHOLDER};

/// Common result type using anyhow::Error
pub type Result<T> = anyhow::Result<T>;
