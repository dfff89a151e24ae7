// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::domain::model::{CutPlan, MediaHandle, Transcript};

/// Port for resolving a user-provided source to local media with a
/// known duration
#[async_trait]
pub trait AcquirePort: Send + Sync {
    /// Resolve a local path or URL into a media handle. URLs are
    /// downloaded into `workdir`; the duration is probed in both cases.
    async fn resolve(&self, source: &str, workdir: &Path) -> Result<MediaHandle, DomainError>;
}

/// Port for speech transcription
#[async_trait]
pub trait TranscribePort: Send + Sync {
    /// Transcribe an audio file into timestamped segments
    async fn transcribe(&self, audio_path: &Path) -> Result<Transcript, DomainError>;
}

/// Port for the moment-extraction service
#[async_trait]
pub trait AnalyzePort: Send + Sync {
    /// Send the prompt-formatted transcript text and return the raw,
    /// free-form model response for the assembly engine to parse
    async fn analyze(&self, transcript_text: &str) -> Result<String, DomainError>;
}

/// Port for the media-processing backend
#[async_trait]
pub trait RenderPort: Send + Sync {
    /// Extract mono 16 kHz PCM audio suitable for transcription
    async fn extract_audio(&self, source: &Path, audio_out: &Path) -> Result<(), DomainError>;

    /// Execute a cut plan against the source file: trim each segment
    /// and concatenate them into `output`. The plan is the sole input
    /// describing what to cut; the renderer holds no other state.
    async fn render(
        &self,
        plan: &CutPlan,
        source: &Path,
        output: &Path,
    ) -> Result<PathBuf, DomainError>;
}
