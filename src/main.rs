//! gazeselect - gaze dwell selection for head-mounted displays
//!
//! Headless driver: loads a scene, replays a scripted gaze against it frame by
//! frame, and logs every selection and focus event.

mod config;
mod headless;
mod scripted_gaze;

use anyhow::Result;
use clap::Parser;
use config::SceneConfig;
use headless::HeadlessConfig;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay scripted gaze against a dwell-selection scene", long_about = None)]
struct Args {
    /// Scene file (TOML); defaults to config/scene.toml or a built-in scene
    #[arg(long)]
    scene: Option<PathBuf>,
    /// Gaze script (JSON steps); defaults to a tour of every panel
    #[arg(long)]
    script: Option<PathBuf>,
    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u64,
    /// Seconds per frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
    /// Write events as JSON lines to this path
    #[arg(long)]
    events: Option<PathBuf>,
    /// Only report gaze hits; do not drive the cursor, selectors or panels
    #[arg(long)]
    report_only: bool,
    /// Write the resolved scene to this path (TOML) and exit
    #[arg(long)]
    save_scene: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    info!("Starting gazeselect v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    if !(args.dt.is_finite() && args.dt > 0.0) {
        anyhow::bail!("--dt must be a positive number of seconds");
    }

    let scene = match &args.scene {
        Some(path) => SceneConfig::load_from_path(path),
        None => SceneConfig::load(),
    };

    if let Some(path) = &args.save_scene {
        scene.save_to_path(path)?;
        println!("scene written to {}", path.display());
        return Ok(());
    }

    let summary = headless::run(HeadlessConfig {
        scene,
        script: args.script,
        frames: args.frames,
        dt: args.dt,
        events: args.events,
        report_only: args.report_only,
    })?;

    println!(
        "{} frames: {} selections, {} deselections, {} focus triggers, {} arrivals, {} returns to rest",
        summary.frames,
        summary.selections,
        summary.deselections,
        summary.focus_triggers,
        summary.focus_arrivals,
        summary.returns_to_rest
    );
    if !summary.script_finished {
        info!("gaze script still running after {} frames", summary.frames);
    }

    Ok(())
}
