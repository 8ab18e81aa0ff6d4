//! Cover image display.
//!
//! Downloads a cover image, verifies it decodes, stages it in a temporary
//! file and hands it to the platform's default image viewer. Every failure
//! here is recoverable: the caller logs it and the session continues.

use anyhow::Context;
use async_trait::async_trait;
use image::{GenericImageView, ImageFormat};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Failures while fetching or displaying a cover image
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("failed to download image: {0}")]
    Download(#[from] reqwest::Error),

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("failed to stage image file: {0}")]
    Stage(#[from] std::io::Error),

    #[error("failed to launch image viewer: {0}")]
    Launch(std::io::Error),
}

/// Something that can display a cover image given its URL
#[async_trait]
pub trait CoverView {
    /// Fetch and display the image at `url`
    async fn show(&self, url: &str) -> Result<(), ViewerError>;
}

/// Cover viewer backed by the platform's default image application
pub struct ImageViewer {
    client: reqwest::Client,
}

impl ImageViewer {
    /// Create a viewer with its own HTTP client
    pub fn new(timeout_secs: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("anime-recommender/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl CoverView for ImageViewer {
    async fn show(&self, url: &str) -> Result<(), ViewerError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;

        let format = image::guess_format(&bytes)?;
        let decoded = image::load_from_memory(&bytes)?;
        let (width, height) = decoded.dimensions();
        debug!(url, width, height, format = ?format, "Cover image decoded");

        let path = stage_image(&bytes, format)?;
        open_in_default_viewer(&path)?;

        Ok(())
    }
}

/// Write the image bytes to a kept temporary file with a matching extension
///
/// The file must outlive this call: the viewer process is spawned detached
/// and only reads the file after we have returned to the loop.
fn stage_image(bytes: &[u8], format: ImageFormat) -> Result<PathBuf, ViewerError> {
    let ext = format.extensions_str().first().copied().unwrap_or("img");

    let mut file = tempfile::Builder::new()
        .prefix("anime-cover-")
        .suffix(&format!(".{}", ext))
        .tempfile()?;
    file.write_all(bytes)?;

    file.into_temp_path()
        .keep()
        .map_err(|e| ViewerError::Stage(e.error))
}

/// Spawn the platform opener on the staged file without waiting on it
fn open_in_default_viewer(path: &Path) -> Result<(), ViewerError> {
    let mut command = if cfg!(target_os = "macos") {
        let mut c = Command::new("open");
        c.arg(path);
        c
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]).arg(path);
        c
    } else {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    };

    command
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(ViewerError::Launch)?;

    Ok(())
}
