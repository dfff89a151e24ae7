//! CLI module for ReelCut
//!
//! This module handles command-line argument parsing and command execution.

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// ReelCut CLI
///
/// Turns a long video into a highlight reel: transcribe the speech, ask
/// a language model for the interesting moments, assemble a time-accurate
/// cut plan, and stitch the segments into one output file.
#[derive(Parser)]
#[command(name = "reelcut")]
#[command(about = "ReelCut - video highlight reels from transcript analysis")]
#[command(version)]
pub struct Cli {
    /// Logging level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the full pipeline: acquire, transcribe, analyze, cut, stitch
    Run(args::RunArgs),
    /// Assemble a cut plan from a saved highlights file without rendering
    Plan(args::PlanArgs),
    /// Print the probed duration of a media file
    Probe(args::ProbeArgs),
}
