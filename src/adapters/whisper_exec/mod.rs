//! Transcription adapter backed by the `whisper` CLI
//!
//! Whisper writes its result as an SRT file; that file is parsed back
//! into transcript segments so the rest of the pipeline never touches
//! whisper's own formats.

use std::path::Path;

use async_trait::async_trait;
use tracing::info;

use crate::adapters::run_tool;
use crate::domain::errors::DomainError;
use crate::domain::model::Transcript;
use crate::ports::TranscribePort;

/// Shells out to the openai-whisper command-line tool
pub struct WhisperCliTranscriber {
    model: String,
}

impl WhisperCliTranscriber {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

#[async_trait]
impl TranscribePort for WhisperCliTranscriber {
    async fn transcribe(&self, audio_path: &Path) -> Result<Transcript, DomainError> {
        info!(model = %self.model, audio = %audio_path.display(), "transcribing audio");

        let out_dir = tempfile::tempdir().map_err(|e| DomainError::FsFail(e.to_string()))?;
        run_tool(
            "whisper",
            [
                audio_path.as_os_str(),
                "--model".as_ref(),
                self.model.as_ref(),
                "--output_format".as_ref(),
                "srt".as_ref(),
                "--output_dir".as_ref(),
                out_dir.path().as_os_str(),
            ],
        )
        .await?;

        let stem = audio_path
            .file_stem()
            .ok_or_else(|| DomainError::BadArgs("audio path has no file name".to_string()))?;
        let srt_path = out_dir.path().join(stem).with_extension("srt");
        let srt_text = tokio::fs::read_to_string(&srt_path).await.map_err(|e| {
            DomainError::TranscriptFormat(format!(
                "whisper produced no readable SRT at {}: {}",
                srt_path.display(),
                e
            ))
        })?;

        let transcript = Transcript::from_srt(&srt_text);
        info!(segments = transcript.segments.len(), "transcription complete");
        Ok(transcript)
    }
}
