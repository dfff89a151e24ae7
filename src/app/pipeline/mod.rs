// Highlight pipeline interactor - orchestrates the full run:
// acquire -> transcribe -> analyze -> assemble -> render
//
// Intermediate artifacts (transcript, SRT captions, raw highlights text)
// are written next to the output and reused on reruns, so a failed or
// interrupted run resumes from the last completed stage.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::domain::errors::DomainError;
use crate::domain::model::{CutPlan, MediaHandle, ParseWarning, RejectedMoment};
use crate::domain::rules::{assemble_plan, PlanOptions};
use crate::ports::{AcquirePort, AnalyzePort, RenderPort, TranscribePort};

/// Request for one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineRequest {
    /// Local file path or http(s) URL
    pub source: String,
    /// Directory receiving the reel and all intermediate artifacts
    pub output_dir: PathBuf,
}

/// What one pipeline run produced
#[derive(Debug)]
pub struct PipelineOutcome {
    /// None when the run ended with "no highlights found"
    pub reel_path: Option<PathBuf>,
    pub plan: CutPlan,
    pub rejected: Vec<RejectedMoment>,
    pub warnings: Vec<ParseWarning>,
}

/// Paths of the per-source artifacts, derived from the file stem
struct ArtifactPaths {
    transcript: PathBuf,
    srt: PathBuf,
    highlights: PathBuf,
    temp_audio: PathBuf,
    reel: PathBuf,
}

/// Interactor driving the highlight-reel use case through the ports
pub struct HighlightInteractor {
    acquire_port: Arc<dyn AcquirePort>,
    transcribe_port: Arc<dyn TranscribePort>,
    analyze_port: Arc<dyn AnalyzePort>,
    render_port: Arc<dyn RenderPort>,
    config: AppConfig,
}

impl HighlightInteractor {
    pub fn new(
        acquire_port: Arc<dyn AcquirePort>,
        transcribe_port: Arc<dyn TranscribePort>,
        analyze_port: Arc<dyn AnalyzePort>,
        render_port: Arc<dyn RenderPort>,
        config: AppConfig,
    ) -> Self {
        Self {
            acquire_port,
            transcribe_port,
            analyze_port,
            render_port,
            config,
        }
    }

    pub async fn run(&self, request: PipelineRequest) -> Result<PipelineOutcome, DomainError> {
        tokio::fs::create_dir_all(&request.output_dir)
            .await
            .map_err(|e| DomainError::FsFail(e.to_string()))?;

        let media = self
            .acquire_port
            .resolve(&request.source, &request.output_dir)
            .await?;
        let artifacts = self.artifact_paths(&media, &request.output_dir)?;

        let transcript_text = self.transcript_stage(&media, &artifacts).await?;
        let highlights_text = self.highlights_stage(&transcript_text, &artifacts).await?;

        let options = PlanOptions {
            padding_seconds: self.config.padding_seconds,
        };
        let outcome = assemble_plan(&highlights_text, media.duration, &options)?;

        for warning in &outcome.warnings {
            warn!(line = ?warning.line, code = ?warning.reason, "{}", warning.message);
        }
        for rejected in &outcome.rejected {
            warn!(
                reason = %rejected.reason,
                title = %rejected.candidate.title,
                start = %rejected.candidate.start_raw,
                end = %rejected.candidate.end_raw,
                "candidate moment rejected"
            );
        }

        if outcome.no_highlights() {
            info!("no highlights found; nothing to render");
            return Ok(PipelineOutcome {
                reel_path: None,
                plan: outcome.plan,
                rejected: outcome.rejected,
                warnings: outcome.warnings,
            });
        }

        let reel_path = self
            .render_port
            .render(&outcome.plan, &media.path, &artifacts.reel)
            .await?;

        Ok(PipelineOutcome {
            reel_path: Some(reel_path),
            plan: outcome.plan,
            rejected: outcome.rejected,
            warnings: outcome.warnings,
        })
    }

    /// Produce (or reuse) the prompt-formatted transcript text
    async fn transcript_stage(
        &self,
        media: &MediaHandle,
        artifacts: &ArtifactPaths,
    ) -> Result<String, DomainError> {
        if artifacts.transcript.is_file() {
            info!(path = %artifacts.transcript.display(), "reusing existing transcript");
            return tokio::fs::read_to_string(&artifacts.transcript)
                .await
                .map_err(|e| DomainError::FsFail(e.to_string()));
        }

        self.render_port
            .extract_audio(&media.path, &artifacts.temp_audio)
            .await?;
        let result = self.transcribe_port.transcribe(&artifacts.temp_audio).await;
        // The temp audio is large; remove it whether or not transcription worked
        if let Err(e) = tokio::fs::remove_file(&artifacts.temp_audio).await {
            warn!(error = %e, "could not remove temporary audio file");
        }
        let transcript = result?;

        let text = transcript.format_for_prompt();
        tokio::fs::write(&artifacts.transcript, &text)
            .await
            .map_err(|e| DomainError::FsFail(e.to_string()))?;
        tokio::fs::write(&artifacts.srt, transcript.to_srt())
            .await
            .map_err(|e| DomainError::FsFail(e.to_string()))?;
        info!(path = %artifacts.transcript.display(), "transcript saved");

        Ok(text)
    }

    /// Produce (or reuse) the raw highlights text from the model
    async fn highlights_stage(
        &self,
        transcript_text: &str,
        artifacts: &ArtifactPaths,
    ) -> Result<String, DomainError> {
        if artifacts.highlights.is_file() {
            info!(path = %artifacts.highlights.display(), "reusing existing highlights");
            return tokio::fs::read_to_string(&artifacts.highlights)
                .await
                .map_err(|e| DomainError::FsFail(e.to_string()));
        }

        let highlights = self.analyze_port.analyze(transcript_text).await?;
        tokio::fs::write(&artifacts.highlights, &highlights)
            .await
            .map_err(|e| DomainError::FsFail(e.to_string()))?;
        info!(path = %artifacts.highlights.display(), "highlights saved");
        Ok(highlights)
    }

    fn artifact_paths(
        &self,
        media: &MediaHandle,
        output_dir: &Path,
    ) -> Result<ArtifactPaths, DomainError> {
        let stem = media
            .path
            .file_stem()
            .ok_or_else(|| DomainError::BadArgs("media path has no file name".to_string()))?
            .to_string_lossy();

        let named = |suffix: &str| output_dir.join(format!("{}{}", stem, suffix));
        Ok(ArtifactPaths {
            transcript: named(&self.config.transcript_suffix),
            srt: named(&self.config.srt_suffix),
            highlights: named(&self.config.highlights_suffix),
            temp_audio: named(&self.config.temp_audio_suffix),
            reel: named(&self.config.reel_suffix),
        })
    }
}
