//! ReelCut CLI
//!
//! Turns a long video into a highlight reel by transcribing speech,
//! asking a language model for the interesting moments, and assembling
//! a validated cut plan executed with ffmpeg stream copies.
//!
//! # Usage
//!
//! ```bash
//! reelcut run "https://youtube.com/watch?v=..." --output-dir output
//! reelcut run video.mp4 --padding 1.5
//! reelcut plan --highlights output/video_highlights.txt --duration 01:30:00 --json
//! reelcut probe --input video.mp4
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use reelcut_cli::cli::{commands, Cli, Commands};

/// Main entry point for the ReelCut CLI application
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the --log-level flag when both are set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting ReelCut");

    match cli.command {
        Commands::Run(args) => commands::run(args).await?,
        Commands::Plan(args) => commands::plan(args).await?,
        Commands::Probe(args) => commands::probe(args).await?,
    }

    Ok(())
}
