//! Anime recommender CLI application.

use anime_recommender::{CoverView, ImageViewer, JikanClient, RecommendationSession, TopAnimeFetcher};
use anyhow::{bail, Context, Result};
use clap::Parser;
use shared::Config;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// How many top-ranked anime to fetch (overrides the configured limit)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Don't open cover images in the platform viewer
    #[arg(long)]
    no_images: bool,
}

// Everything here is sequential; a current-thread runtime is all the
// program needs
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration (defaults apply when the file is absent)
    let config = Config::from_file(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    // Initialize logging
    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        config
            .logging
            .default_level
            .parse()
            .unwrap_or(tracing::Level::INFO)
    };

    shared::logging::init(shared::LogConfig {
        log_dir: config.log_dir().to_string_lossy().to_string(),
        component: "anime-recommender".to_string(),
        default_level: log_level,
        console: config.logging.console,
        file: config.logging.file,
        json_format: config.logging.json_format,
    })?;

    // Fetch the catalog once at startup
    let limit = args.limit.unwrap_or(config.recommender.fetch_limit);

    let client = JikanClient::new(
        config.recommender.base_url.clone(),
        config.recommender.request_timeout_secs,
    )
    .context("Failed to create Jikan client")?;
    let fetcher = TopAnimeFetcher::new(client);

    info!("Fetching anime data, please wait");
    let entries = fetcher
        .fetch(limit)
        .await
        .context("Failed to fetch top anime")?;

    if entries.is_empty() {
        bail!("No anime entries could be fetched, nothing to recommend");
    }

    info!(count = entries.len(), "Loaded anime from MyAnimeList");

    // Cover display is best-effort and can be turned off entirely
    let viewer;
    let cover_view: Option<&dyn CoverView> = if config.recommender.show_images && !args.no_images {
        viewer = ImageViewer::new(config.recommender.request_timeout_secs)
            .context("Failed to create image viewer")?;
        Some(&viewer)
    } else {
        None
    };

    // Run the interactive loop on real stdin/stdout
    let session = RecommendationSession::new(&entries, cover_view);
    let mut rng = rand::thread_rng();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let shown = session
        .run(&mut rng, &mut stdin.lock(), &mut stdout.lock())
        .await?;

    info!(recommendations = shown, "Session finished");

    Ok(())
}
