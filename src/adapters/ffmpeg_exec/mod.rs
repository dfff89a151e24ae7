//! Media renderer backed by the ffmpeg CLI
//!
//! Each plan segment is trimmed with stream copy (no re-encode) into a
//! temp directory, then the clips are stitched with the concat demuxer.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};

use crate::adapters::run_tool;
use crate::domain::errors::DomainError;
use crate::domain::model::CutPlan;
use crate::ports::RenderPort;

/// Stream-copy trim-and-concatenate renderer
pub struct FfmpegRenderer;

impl FfmpegRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FfmpegRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RenderPort for FfmpegRenderer {
    async fn extract_audio(&self, source: &Path, audio_out: &Path) -> Result<(), DomainError> {
        info!(source = %source.display(), "extracting audio for transcription");
        run_tool(
            "ffmpeg",
            [
                "-y".as_ref(),
                "-i".as_ref(),
                source.as_os_str(),
                "-vn".as_ref(),
                "-acodec".as_ref(),
                "pcm_s16le".as_ref(),
                "-ar".as_ref(),
                "16000".as_ref(),
                "-ac".as_ref(),
                "1".as_ref(),
                audio_out.as_os_str(),
            ],
        )
        .await?;
        Ok(())
    }

    async fn render(
        &self,
        plan: &CutPlan,
        source: &Path,
        output: &Path,
    ) -> Result<PathBuf, DomainError> {
        if plan.is_empty() {
            return Err(DomainError::BadArgs(
                "cannot render an empty cut plan".to_string(),
            ));
        }

        info!(
            segments = plan.segments.len(),
            total_seconds = plan.total_duration,
            "rendering highlight reel"
        );

        let temp_dir = tempfile::tempdir().map_err(|e| DomainError::FsFail(e.to_string()))?;
        let mut clip_paths = Vec::with_capacity(plan.segments.len());

        for (index, segment) in plan.segments.iter().enumerate() {
            let clip_path = temp_dir.path().join(format!("clip_{}.mp4", index));
            debug!(
                index,
                start = %segment.start,
                end = %segment.end,
                title = %segment.title,
                "cutting segment"
            );
            let start = segment.start.format_hms();
            let end = segment.end.format_hms();
            run_tool(
                "ffmpeg",
                [
                    "-y".as_ref(),
                    "-ss".as_ref(),
                    start.as_ref(),
                    "-to".as_ref(),
                    end.as_ref(),
                    "-i".as_ref(),
                    source.as_os_str(),
                    "-c".as_ref(),
                    "copy".as_ref(),
                    clip_path.as_os_str(),
                ],
            )
            .await?;
            clip_paths.push(clip_path);
        }

        // Concat demuxer needs a file list with absolute paths
        let list_path = temp_dir.path().join("concat_list.txt");
        let mut list = String::new();
        for clip in &clip_paths {
            list.push_str(&format!("file '{}'\n", clip.display()));
        }
        tokio::fs::write(&list_path, list)
            .await
            .map_err(|e| DomainError::FsFail(e.to_string()))?;

        run_tool(
            "ffmpeg",
            [
                "-y".as_ref(),
                "-f".as_ref(),
                "concat".as_ref(),
                "-safe".as_ref(),
                "0".as_ref(),
                "-i".as_ref(),
                list_path.as_os_str(),
                "-c".as_ref(),
                "copy".as_ref(),
                output.as_os_str(),
            ],
        )
        .await?;

        info!(output = %output.display(), "highlight reel written");
        Ok(output.to_path_buf())
    }
}
