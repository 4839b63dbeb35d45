//! Channel-to-short automation binary.

use std::path::PathBuf;
use tracing::{error, info, warn};

use shortify_cli::{AppConfig, Orchestrator};
use shortify_media::{check_ffmpeg, check_ffprobe, check_ytdlp, Compositor, FfmpegBackend, Fetcher, StageDirs};
use shortify_source::ChannelClient;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return;
        }
    };

    if let Err(e) = shortify_cli::logging::init(&config.log_path()) {
        eprintln!("Failed to initialize logging: {e}");
        return;
    }

    info!("Starting shortify");

    // Failures below are logged rather than escalated; the run exits 0
    // either way and the log file is the record.
    if let Err(e) = run(config).await {
        error!("Run did not produce a short: {e}");
    }

    info!("Run complete");
}

async fn run(config: AppConfig) -> anyhow::Result<PathBuf> {
    check_ffmpeg()?;
    check_ffprobe()?;
    check_ytdlp()?;

    tokio::fs::create_dir_all(&config.work_dir).await?;

    let client = ChannelClient::new(config.api_key.clone(), config.channel_id.clone());

    let watermark = resolve_watermark(&config, &client).await;
    let spec = config.composition_spec(watermark);

    let fetcher = Fetcher::new(config.downloads_dir(), config.fetch_policy());
    let compositor = Compositor::new(spec, StageDirs::under(&config.work_dir), FfmpegBackend::new());

    let orchestrator = Orchestrator::new(
        client,
        fetcher,
        compositor,
        config.max_trials,
        config.max_results,
    );

    Ok(orchestrator.run().await?)
}

/// Resolve the watermark image: an explicitly configured path wins;
/// otherwise the channel logo is fetched and cached. The watermark is
/// optional, so every failure here degrades to "no watermark".
async fn resolve_watermark(config: &AppConfig, client: &ChannelClient) -> Option<PathBuf> {
    if let Some(path) = &config.watermark_path {
        if path.exists() {
            return Some(path.clone());
        }
        warn!(path = %path.display(), "Configured watermark not found, falling back to channel logo");
    }

    let logo_path = config.channel_logo_path();
    if logo_path.exists() {
        return Some(logo_path);
    }

    let logo_url = match client.channel_logo_url().await {
        Ok(url) => url,
        Err(e) => {
            warn!("Channel logo lookup failed, continuing without watermark: {e}");
            return None;
        }
    };

    match client.download_logo(&logo_url, &logo_path).await {
        Ok(()) => Some(logo_path),
        Err(e) => {
            warn!("Channel logo download failed, continuing without watermark: {e}");
            None
        }
    }
}
