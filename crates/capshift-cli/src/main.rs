//! capshift CLI — styles a subtitle track against detection telemetry.
//!
//! Reads a cue track plus the face and text detection payloads from JSON
//! files, runs the placement engine, and writes the styled track back out.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use capshift_engine::{
    parse_cue_track, parse_face_channel, parse_frame_metadata, parse_text_channel, CueStyler,
};

#[derive(Parser)]
#[command(name = "capshift")]
#[command(
    about = "Shift subtitle cues horizontally so they stay clear of detected faces and on-screen text"
)]
#[command(version)]
struct Cli {
    /// Path to the cue track (JSON array of {start, end, text} cues).
    #[arg(long)]
    track: PathBuf,

    /// Path to the face detection payload (JSON array).
    #[arg(long)]
    faces: PathBuf,

    /// Path to the text detection payload (JSON array).
    #[arg(long)]
    texts: PathBuf,

    /// Path to the frame metadata (JSON with FrameWidth/FrameHeight).
    #[arg(long)]
    metadata: PathBuf,

    /// Output path for the styled track. Defaults to the track path with
    /// `.styled` inserted before the extension.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("capshift=info"));

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("capshift failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let track_raw = read_input(&cli.track, "cue track").await?;
    let faces_raw = read_input(&cli.faces, "face detection payload").await?;
    let texts_raw = read_input(&cli.texts, "text detection payload").await?;
    let metadata_raw = read_input(&cli.metadata, "frame metadata").await?;

    let mut cues = parse_cue_track(&track_raw)?;
    let faces = parse_face_channel(&faces_raw)?;
    let texts = parse_text_channel(&texts_raw)?;
    let metadata = parse_frame_metadata(&metadata_raw)?;

    let styler = CueStyler::new(&metadata, &faces, &texts)?;
    styler.style_track(&mut cues);

    let out = cli
        .out
        .clone()
        .unwrap_or_else(|| styled_output_path(&cli.track));
    let json = serde_json::to_string_pretty(&cues).context("serializing styled track")?;
    tokio::fs::write(&out, json)
        .await
        .with_context(|| format!("writing styled track to {}", out.display()))?;

    info!(path = %out.display(), cues = cues.len(), "Wrote styled track");
    Ok(())
}

async fn read_input(path: &Path, what: &str) -> anyhow::Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {} from {}", what, path.display()))
}

/// Derive the default output path by inserting `.styled` before the
/// extension: `track.json` becomes `track.styled.json`.
fn styled_output_path(track: &Path) -> PathBuf {
    match track.extension().and_then(|e| e.to_str()) {
        Some(ext) => track.with_extension(format!("styled.{ext}")),
        None => track.with_extension("styled"),
    }
}
