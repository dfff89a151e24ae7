//! Application configuration
//!
//! Defaults live in code; an optional `reelcut.toml` next to the working
//! directory overrides them, and CLI flags override both. Every option's
//! effect is explicit here rather than buried as a module-level default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ReelError, ReelResult};

/// Default config file name searched in the current directory
pub const CONFIG_FILE_NAME: &str = "reelcut.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Whisper model used by the transcription adapter
    pub whisper_model: String,

    /// Model slug sent to the moment-extraction API
    pub llm_model: String,

    /// Chat-completions endpoint
    pub api_url: String,

    /// Symmetric padding added to each plan segment, in seconds
    pub padding_seconds: f64,

    /// Artifact file suffixes, appended to the source file stem
    pub transcript_suffix: String,
    pub srt_suffix: String,
    pub highlights_suffix: String,
    pub reel_suffix: String,
    pub temp_audio_suffix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            whisper_model: "base.en".to_string(),
            llm_model: "deepseek/deepseek-chat-v3-0324:free".to_string(),
            api_url: "https://openrouter.ai/api/v1/chat/completions".to_string(),
            padding_seconds: 0.0,
            transcript_suffix: "_transcript.txt".to_string(),
            srt_suffix: "_transcript.srt".to_string(),
            highlights_suffix: "_highlights.txt".to_string(),
            reel_suffix: "_highlight.mp4".to_string(),
            temp_audio_suffix: "_temp_audio.wav".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from an explicit path, or from `reelcut.toml` in the current
    /// directory when present, falling back to defaults
    pub fn load(path: Option<&Path>) -> ReelResult<Self> {
        let candidate = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = Path::new(CONFIG_FILE_NAME);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default.to_path_buf()
            }
        };

        let text = std::fs::read_to_string(&candidate)?;
        toml::from_str(&text)
            .map_err(|e| ReelError::Config(format!("{}: {}", candidate.display(), e)))
    }
}
