//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Video source: a local file path or an http(s) URL
    pub source: String,

    /// Directory for the reel and intermediate artifacts
    #[arg(short, long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Whisper model for transcription
    #[arg(long)]
    pub whisper_model: Option<String>,

    /// Model slug for the moment-extraction API
    #[arg(long)]
    pub llm_model: Option<String>,

    /// Symmetric segment padding in seconds
    #[arg(long)]
    pub padding: Option<f64>,

    /// API key for the moment-extraction service
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Path to a config file (default: ./reelcut.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Saved model output (highlights text file)
    #[arg(short = 'H', long)]
    pub highlights: PathBuf,

    /// Media duration as hh:mm:ss or mm:ss (alternative to --input)
    #[arg(short, long)]
    pub duration: Option<String>,

    /// Media file to probe for the duration (alternative to --duration)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Symmetric segment padding in seconds
    #[arg(long, default_value_t = 0.0)]
    pub padding: f64,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the probe command
#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Input media file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
